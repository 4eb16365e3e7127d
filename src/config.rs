//! Configuration module.
//!
//! Loads the `govanity.cfg` file that declares which import paths to serve and
//! where their repositories live. The file is TOML with one `[default]` table
//! and any number of `[import."<path>"]` tables:
//!
//! ```toml
//! [default]
//! root = "rtrn.io"
//! repo = "https://github.com/rtrn/$"
//!
//! [import."cmd/govanity"]
//! [import."cmd/uuenc"]
//! recurse = false
//! ```
//!
//! ## Entry Fields
//!
//! | Key | Meaning | Built-in default |
//! |-----|---------|------------------|
//! | `root` | Domain prefixed to the import key | none |
//! | `repo` | Repository URL template (required) | none |
//! | `vcs` | Version control system | `git` |
//! | `redirect` | Documentation URL template, `""` disables | `https://godoc.org/*` |
//! | `recurse` | Discover nested packages (alias `dirs`) | `true` |
//!
//! Every field is optional on every table. An unset field on an import falls
//! back to the same field of `[default]`, one field at a time. Unset and empty
//! are different: an empty `redirect` suppresses the redirect, an unset one
//! inherits it.
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default configuration file name, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "govanity.cfg";

/// VCS used when neither the import nor `[default]` sets one.
pub const DEFAULT_VCS: &str = "git";

/// Redirect template used when neither the import nor `[default]` sets one.
pub const DEFAULT_REDIRECT: &str = "https://godoc.org/*";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("{0:?}: repo is not set")]
    MissingRepo(String),
}

/// One table of the configuration file.
///
/// `None` means the key was absent from the file; `Some("")` means it was
/// present and empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Entry {
    pub root: Option<String>,
    pub repo: Option<String>,
    pub vcs: Option<String>,
    pub redirect: Option<String>,
    #[serde(alias = "dirs", deserialize_with = "deserialize_truthy")]
    pub recurse: Option<bool>,
}

impl Entry {
    /// Fill every unset field from `fallback`, field by field.
    pub fn or(&self, fallback: &Entry) -> Entry {
        Entry {
            root: self.root.clone().or_else(|| fallback.root.clone()),
            repo: self.repo.clone().or_else(|| fallback.repo.clone()),
            vcs: self.vcs.clone().or_else(|| fallback.vcs.clone()),
            redirect: self.redirect.clone().or_else(|| fallback.redirect.clone()),
            recurse: self.recurse.or(fallback.recurse),
        }
    }

    /// The entry holding the built-in defaults for `vcs`, `redirect` and `recurse`.
    pub fn builtin() -> Entry {
        Entry {
            vcs: Some(DEFAULT_VCS.to_string()),
            redirect: Some(DEFAULT_REDIRECT.to_string()),
            recurse: Some(true),
            ..Entry::default()
        }
    }
}

/// The whole configuration file.
///
/// Produced once by [`load_config`] or [`parse_config`] and only read after that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Fallback values for every import.
    pub default: Entry,
    /// Import key (e.g. `cmd/govanity`) to its entry.
    pub import: BTreeMap<String, Entry>,
}

/// Parse configuration text and apply the built-in defaults to `[default]`.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let mut config: Config = toml::from_str(content)?;
    config.default = config.default.or(&Entry::builtin());
    Ok(config)
}

/// Load the configuration file at `path`.
///
/// A missing file is an error: there is nothing to generate without one.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Accept a TOML boolean or one of the conventional truthy/falsy strings.
fn deserialize_truthy<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Truthy {
        Bool(bool),
        Text(String),
    }

    match Truthy::deserialize(deserializer)? {
        Truthy::Bool(b) => Ok(Some(b)),
        Truthy::Text(s) => parse_truthy(&s).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid boolean {s:?}, expected true or false"))
        }),
    }
}

/// Interpret `yes/no`, `on/off`, `true/false` and `1/0`, case-insensitively.
pub fn parse_truthy(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Returns a fully-commented stock configuration file.
///
/// Used by the `--gen-config` flag.
pub fn stock_config_toml() -> &'static str {
    r##"# govanity configuration
# ======================
# Every [import."<path>"] table produces <output>/<path>/index.html carrying a
# go-import meta tag for <root>/<path>.
#
# Any key left out of an import table is taken from [default].
# Unknown keys will cause an error.

[default]
# Domain serving the vanity import paths.
root = "example.com"

# Repository URL. "*" is replaced by the full import path (root included),
# "$" by the last element of the import path.
repo = "https://github.com/example/$"

# Version control system announced in the go-import tag.
vcs = "git"

# Where browsers are sent. Same placeholders as repo.
# Set to "" to generate pages without a redirect.
redirect = "https://godoc.org/*"

# Walk <GOPATH>/src/<import path> and generate pages for nested packages
# that declare an import comment. The source tree must exist; set to false
# for imports whose source is not checked out.
recurse = true

# ---------------------------------------------------------------------------
# Imports
# ---------------------------------------------------------------------------
[import."cmd/tool"]

[import."lib/thing"]
repo = "https://git.example.com/thing.git"
recurse = false
"##
}
