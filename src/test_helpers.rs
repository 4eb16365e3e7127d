//! Shared test utilities for the govanity test suite.
//!
//! Provides a throwaway Go workspace with nested packages and a shorthand
//! for building resolved entries.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_gopath();
//! let parent = resolved("cmd/govanity", "rtrn.io", "https://godoc.org/*");
//! let dir = tmp.path().join("src/rtrn.io/cmd/govanity");
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::config::Entry;
use crate::resolve::resolve_entry;
use crate::types::ResolvedEntry;

// =========================================================================
// Fixture setup
// =========================================================================

/// Go sources of the fixture workspace, relative to the GOPATH root.
///
/// ```text
/// src/rtrn.io/cmd/govanity/
/// ├── main.go                       # parent's own comment
/// ├── internal/render/render.go     # line comment
/// ├── internal/render/html/html.go  # block comment
/// ├── testdata/sample.go            # no comment
/// └── vendor/example.org/vendored/  # must be skipped
/// ```
pub const GOPATH_FIXTURE: &[(&str, &str)] = &[
    (
        "src/rtrn.io/cmd/govanity/main.go",
        "package main // import \"rtrn.io/cmd/govanity\"\n\nfunc main() {}\n",
    ),
    (
        "src/rtrn.io/cmd/govanity/internal/render/render.go",
        "// Package render renders pages.\npackage render // import \"rtrn.io/cmd/govanity/internal/render\"\n",
    ),
    (
        "src/rtrn.io/cmd/govanity/internal/render/html/html.go",
        "package html /* import \"rtrn.io/cmd/govanity/internal/render/html\" */\n",
    ),
    (
        "src/rtrn.io/cmd/govanity/testdata/sample.go",
        "package sample\n",
    ),
    (
        "src/rtrn.io/cmd/govanity/vendor/example.org/vendored/v.go",
        "package vendored // import \"example.org/vendored\"\n",
    ),
];

/// Write the fixture workspace into a fresh temp directory and return it.
///
/// Use the returned directory as the only source root.
pub fn setup_gopath() -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (rel, content) in GOPATH_FIXTURE {
        write_go_file(tmp.path(), rel, content);
    }
    tmp
}

/// Write `content` to `root/rel`, creating parent directories.
pub fn write_go_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

// =========================================================================
// Entry construction
// =========================================================================

/// Resolve `key` under `root` with repo `https://github.com/rtrn/$` and the
/// given redirect template.
pub fn resolved(key: &str, root: &str, redirect: &str) -> ResolvedEntry {
    let defaults = Entry {
        root: Some(root.to_string()),
        repo: Some("https://github.com/rtrn/$".to_string()),
        redirect: Some(redirect.to_string()),
        ..Entry::builtin()
    };
    resolve_entry(key, &Entry::default(), &defaults)
        .unwrap_or_else(|e| panic!("fixture entry '{key}' failed to resolve: {e}"))
}

/// Read `<out>/<rel>/index.html`. Panics with the path if it is missing.
pub fn read_page(out: &Path, rel: &str) -> String {
    let path = out.join(rel).join("index.html");
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("page {} not readable: {e}", path.display()))
}
