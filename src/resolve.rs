//! Entry resolution.
//!
//! Turns the sparse entries of a [`Config`] into [`ResolvedEntry`] values:
//!
//! 1. Unset fields are filled from `[default]`, field by field.
//! 2. A missing or empty `repo` is a [`ConfigError::MissingRepo`].
//! 3. The import path is `root + "/" + key`, or just `key` without a root.
//! 4. `*` and `$` are expanded once, in `repo` and in `redirect`.
//!
//! Resolution is pure: the configuration is not touched and the result is a
//! fresh list, so a failure leaves nothing half-resolved.

use crate::config::{Config, ConfigError, Entry};
use crate::naming;
use crate::types::ResolvedEntry;

/// The substitutions applied to `repo` and `redirect` templates.
///
/// - `*` → full import path, root included (`rtrn.io/cmd/foo`)
/// - `$` → last element of the import key (`foo`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders<'a> {
    pub import_path: &'a str,
    pub last_segment: &'a str,
}

impl<'a> Placeholders<'a> {
    pub fn new(import_path: &'a str, key: &'a str) -> Self {
        Self {
            import_path,
            last_segment: naming::last_segment(key),
        }
    }

    /// Expand placeholders in a single left-to-right pass.
    ///
    /// Substituted text is never scanned again, so an import path containing
    /// `$` or `*` is inserted literally.
    pub fn apply(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() + self.import_path.len());
        for c in template.chars() {
            match c {
                '*' => out.push_str(self.import_path),
                '$' => out.push_str(self.last_segment),
                _ => out.push(c),
            }
        }
        out
    }
}

/// Resolve one entry against the `[default]` entry.
pub fn resolve_entry(
    key: &str,
    entry: &Entry,
    defaults: &Entry,
) -> Result<ResolvedEntry, ConfigError> {
    let merged = entry.or(defaults);

    let repo = match merged.repo.as_deref() {
        Some(repo) if !repo.is_empty() => repo,
        _ => return Err(ConfigError::MissingRepo(key.to_string())),
    };

    let import_path = naming::join_import_path(merged.root.as_deref(), key);
    let placeholders = Placeholders::new(&import_path, key);

    let repo = placeholders.apply(repo);
    let redirect_template = merged.redirect.unwrap_or_default();
    let redirect = placeholders.apply(&redirect_template);

    Ok(ResolvedEntry {
        import_prefix: import_path.clone(),
        import_path,
        repo,
        vcs: merged.vcs.unwrap_or_default(),
        redirect,
        redirect_template,
        recurse: merged.recurse.unwrap_or(true),
    })
}

/// Resolve every import of `config`, in key order.
///
/// Stops at the first entry that fails.
pub fn resolve_all(config: &Config) -> Result<Vec<ResolvedEntry>, ConfigError> {
    config
        .import
        .iter()
        .map(|(key, entry)| resolve_entry(key, entry, &config.default))
        .collect()
}
