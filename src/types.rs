//! Shared types passed from resolution to rendering and writing.

/// An import entry with every default applied and every placeholder expanded.
///
/// Declared entries come out of [`resolve`](crate::resolve); entries for
/// nested packages are derived from their parent by
/// [`scan`](crate::scan) and never recurse themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    /// Full import path this page is served for (`rtrn.io/cmd/govanity`).
    /// Determines the output location.
    pub import_path: String,
    /// Import prefix announced in the go-import tag, i.e. the path matching
    /// the repository root. Equal to `import_path` for declared entries.
    pub import_prefix: String,
    /// Repository URL.
    pub repo: String,
    /// Version control system (`git`, `hg`, ...).
    pub vcs: String,
    /// Documentation URL browsers are sent to. Empty means no redirect.
    pub redirect: String,
    /// The redirect before placeholder expansion, kept for derived entries.
    pub redirect_template: String,
    /// Whether nested packages below `import_path` are discovered.
    pub recurse: bool,
}

impl ResolvedEntry {
    pub fn has_redirect(&self) -> bool {
        !self.redirect.is_empty()
    }
}
