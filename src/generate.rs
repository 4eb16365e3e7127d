//! Site generation.
//!
//! Drives the whole run:
//!
//! ```text
//! Config ─► resolve_all ─► for each entry:
//!                            render + write  <output>/<path>/index.html
//!                            if recurse: locate source ─► discover
//!                                          └─► render + write each package
//! ```
//!
//! Every entry is resolved before the first file is written, so a
//! configuration error leaves the output directory untouched. After that the
//! first I/O error, or a recursing entry with no source tree in any Go
//! workspace root, aborts the run; pages already written stay in place.

use crate::config::{Config, ConfigError};
use crate::gosrc::{GoSourceInspector, PackageInspector};
use crate::page::{PageData, render_page};
use crate::resolve::resolve_all;
use crate::scan::{self, ScanError, SourceRoots};
use crate::types::ResolvedEntry;
use crate::write::{PageWriter, WriteError, WriteEvent, WriteOutcome};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Settings for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory the pages are written below.
    pub output_dir: PathBuf,
    /// Print a line for every file created or updated.
    pub verbose: bool,
    /// Go workspace roots searched for nested packages.
    pub source_roots: SourceRoots,
}

/// Counts of what happened to the pages of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
}

impl GenerateSummary {
    pub fn total(&self) -> usize {
        self.created + self.updated + self.unchanged
    }

    fn record(&mut self, event: &WriteEvent) {
        match event.outcome {
            WriteOutcome::Created => self.created += 1,
            WriteOutcome::Updated => self.updated += 1,
            WriteOutcome::Unchanged => self.unchanged += 1,
        }
    }
}

/// Generate all pages for `config`, inspecting Go sources on disk.
pub fn generate(
    config: &Config,
    options: &GenerateOptions,
) -> Result<GenerateSummary, GenerateError> {
    generate_with(config, options, &GoSourceInspector)
}

/// Generate all pages for `config` with a custom package inspector.
pub fn generate_with<I>(
    config: &Config,
    options: &GenerateOptions,
    inspector: &I,
) -> Result<GenerateSummary, GenerateError>
where
    I: PackageInspector + ?Sized,
{
    let entries = resolve_all(config)?;
    let writer = PageWriter::new(&options.output_dir, options.verbose);
    let mut summary = GenerateSummary::default();

    for entry in &entries {
        write_entry(&writer, entry, &mut summary)?;
        if !entry.recurse {
            continue;
        }
        let dir = options.source_roots.locate(&entry.import_path)?;
        for derived in scan::discover(entry, &dir, inspector) {
            write_entry(&writer, &derived?, &mut summary)?;
        }
    }

    Ok(summary)
}

fn write_entry(
    writer: &PageWriter,
    entry: &ResolvedEntry,
    summary: &mut GenerateSummary,
) -> Result<(), WriteError> {
    let html = render_page(&PageData::from(entry));
    let event = writer.write(&entry.import_path, &html)?;
    summary.record(&event);
    Ok(())
}
