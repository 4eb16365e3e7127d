//! Nested package discovery.
//!
//! An import declared in the configuration usually has packages below it:
//! `rtrn.io/cmd/govanity` may contain `rtrn.io/cmd/govanity/internal/tmpl`.
//! When an entry has `recurse` enabled, its source tree is located in the
//! Go workspace and walked; every directory declaring an import comment gets
//! a page of its own.
//!
//! ## Source Roots
//!
//! ```text
//! $GOPATH                         # list, split on the platform separator
//! └── src/
//!     └── rtrn.io/cmd/govanity/   # subtree of the declared import
//!         ├── main.go
//!         ├── internal/tmpl/      # import comment → own page
//!         │   └── tmpl.go
//!         ├── testdata/           # no import comment → walked, no page
//!         └── vendor/             # never entered
//! ```
//!
//! Without `GOPATH` the default workspace `$HOME/go` is used. The first root
//! containing the import path wins; when none does the run fails, listing
//! the roots that were searched.
//!
//! ## Derived Entries
//!
//! A discovered package copies its parent's resolved entry. Its page lives at
//! the discovered path, the go-import tag keeps announcing the parent's
//! prefix (the repository root), and the redirect is extended by the
//! discovered path's suffix below the parent. Derived entries never recurse.

use crate::gosrc::PackageInspector;
use crate::naming;
use crate::resolve::Placeholders;
use crate::types::ResolvedEntry;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("{0}")]
    Walk(#[from] walkdir::Error),
    #[error("no source for {import_path} in {}", display_roots(.roots))]
    SourceNotFound {
        import_path: String,
        roots: Vec<PathBuf>,
    },
}

fn display_roots(roots: &[PathBuf]) -> String {
    if roots.is_empty() {
        return "any GOPATH root (GOPATH and HOME unset)".to_string();
    }
    roots
        .iter()
        .map(|r| r.join("src").display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Directories never descended into.
const SKIPPED_DIRS: &[&str] = &["vendor"];

/// The Go workspace roots searched for import path sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRoots {
    roots: Vec<PathBuf>,
}

impl SourceRoots {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Roots from the `GOPATH` environment variable, or `$HOME/go`.
    pub fn from_env() -> Self {
        Self::from_gopath(std::env::var_os("GOPATH"), dirs::home_dir())
    }

    /// Split a `GOPATH` value; empty elements are ignored. Falls back to
    /// `<home>/go` when nothing usable is left.
    pub fn from_gopath(gopath: Option<OsString>, home: Option<PathBuf>) -> Self {
        let roots: Vec<PathBuf> = gopath
            .as_deref()
            .map(|value| {
                std::env::split_paths(value)
                    .filter(|p| !p.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default();
        if !roots.is_empty() {
            return Self { roots };
        }
        Self {
            roots: home.map(|h| h.join("go")).into_iter().collect(),
        }
    }

    /// The source directory of `import_path` in the first root that has one.
    pub fn locate(&self, import_path: &str) -> Result<PathBuf, ScanError> {
        self.roots
            .iter()
            .map(|root| source_dir(root, import_path))
            .find(|dir| dir.is_dir())
            .ok_or_else(|| ScanError::SourceNotFound {
                import_path: import_path.to_string(),
                roots: self.roots.clone(),
            })
    }
}

/// `<root>/src/<import path>`, with the import path's `/` mapped to the
/// platform separator.
fn source_dir(root: &Path, import_path: &str) -> PathBuf {
    import_path
        .split('/')
        .filter(|s| !s.is_empty())
        .fold(root.join("src"), |dir, segment| dir.join(segment))
}

/// Build the entry for a package discovered at `import_path` below `parent`.
pub fn derive_entry(parent: &ResolvedEntry, import_path: &str) -> ResolvedEntry {
    let redirect = if !parent.has_redirect() {
        String::new()
    } else if let Some(suffix) = naming::suffix_below(import_path, &parent.import_path) {
        format!("{}{}", parent.redirect, suffix)
    } else {
        // Not below the parent: expand the template for the discovered path.
        Placeholders::new(import_path, import_path).apply(&parent.redirect_template)
    };

    ResolvedEntry {
        import_path: import_path.to_string(),
        redirect,
        recurse: false,
        ..parent.clone()
    }
}

/// Walk `dir`, the source tree of `parent`, yielding one derived entry per
/// directory that declares an import comment other than the parent's.
///
/// Entries are produced lazily in file-name order. The first walk or read
/// error is yielded as `Err`; callers stop there.
pub fn discover<'a, I>(
    parent: &'a ResolvedEntry,
    dir: &Path,
    inspector: &'a I,
) -> impl Iterator<Item = Result<ResolvedEntry, ScanError>> + 'a
where
    I: PackageInspector + ?Sized,
{
    WalkDir::new(dir)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !(e.file_type().is_dir() && is_skipped(e.file_name())))
        .filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => return Some(Err(ScanError::Walk(e))),
            };
            if !entry.file_type().is_dir() {
                return None;
            }
            match inspector.import_comment(entry.path()) {
                Ok(Some(import)) if import != parent.import_path => {
                    Some(Ok(derive_entry(parent, &import)))
                }
                Ok(_) => None,
                Err(source) => Some(Err(ScanError::Io {
                    path: entry.into_path(),
                    source,
                })),
            }
        })
}

fn is_skipped(name: &std::ffi::OsStr) -> bool {
    SKIPPED_DIRS.iter().any(|s| name == *s)
}
