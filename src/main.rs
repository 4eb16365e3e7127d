use clap::Parser;
use govanity::config::{self, DEFAULT_CONFIG_FILE};
use govanity::generate::{self, GenerateOptions};
use govanity::output;
use govanity::scan::SourceRoots;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "govanity")]
#[command(about = "Create HTML files with go-import meta tags for custom import domains")]
#[command(long_about = "\
Create HTML files with go-import meta tags for custom import domains

Every [import.\"<path>\"] table of the configuration produces
<output>/<path>/index.html. Keys missing from an import are taken from
[default]. In repo and redirect, \"*\" is replaced by the full import path
and \"$\" by its last element.

Example config:

  [default]
  root = \"rtrn.io\"
  repo = \"https://github.com/rtrn/$\"

  [import.\"cmd/govanity\"]

creates cmd/govanity/index.html containing:

  <meta name=\"go-import\" content=\"rtrn.io/cmd/govanity git https://github.com/rtrn/govanity\">
  <meta http-equiv=\"refresh\" content=\"0; url=https://godoc.org/rtrn.io/cmd/govanity\">

With recurse enabled (the default), packages below each import in $GOPATH/src
that declare an import comment get a page too.

Run 'govanity --gen-config' to print a documented configuration.")]
#[command(version)]
struct Cli {
    /// Configuration file
    #[arg(short = 'c', long = "config", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Output directory
    #[arg(short = 'o', long = "output", default_value = ".")]
    output: PathBuf,

    /// Print names of files as they are written
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Print counts of created, updated and unchanged pages when done
    #[arg(long)]
    summary: bool,

    /// Print a documented sample configuration and exit
    #[arg(long)]
    gen_config: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("govanity: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.gen_config {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let config = config::load_config(&cli.config)
        .map_err(|e| format!("{}: {e}", cli.config.display()))?;
    let options = GenerateOptions {
        output_dir: cli.output.clone(),
        verbose: cli.verbose,
        source_roots: SourceRoots::from_env(),
    };
    let summary = generate::generate(&config, &options)?;

    if cli.summary {
        output::print_summary(&summary);
    }
    Ok(())
}
