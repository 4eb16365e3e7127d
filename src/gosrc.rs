//! Go package inspection.
//!
//! A Go package can pin its canonical import path with an import comment on
//! the package clause:
//!
//! ```go
//! package uuenc // import "rtrn.io/cmd/uuenc"
//! package uuenc /* import "rtrn.io/cmd/uuenc" */
//! ```
//!
//! Directory discovery uses these comments to decide which directories below
//! a declared import get their own page. Only the file header is examined;
//! nothing is compiled or type-checked.

use std::fs;
use std::io;
use std::path::Path;

/// Reports the canonical import path a directory declares, if any.
pub trait PackageInspector {
    fn import_comment(&self, dir: &Path) -> io::Result<Option<String>>;
}

/// Reads the `.go` files of a directory from disk.
///
/// Test files and files starting with `.` or `_` are ignored, the same files
/// the Go tool ignores when building a package. Files are read in name order
/// and the first import comment found wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoSourceInspector;

impl PackageInspector for GoSourceInspector {
    fn import_comment(&self, dir: &Path) -> io::Result<Option<String>> {
        let mut sources = fs::read_dir(dir)?
            .map(|e| e.map(|e| e.path()))
            .collect::<io::Result<Vec<_>>>()?;
        sources.retain(|p| p.is_file() && is_package_source(p));
        sources.sort();

        for path in sources {
            let content = fs::read(&path)?;
            let text = String::from_utf8_lossy(&content);
            if let Some(import) = find_import_comment(&text) {
                return Ok(Some(import));
            }
        }
        Ok(None)
    }
}

fn is_package_source(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(".go")
        && !name.ends_with("_test.go")
        && !name.starts_with('.')
        && !name.starts_with('_')
}

/// Extract the import comment from the package clause of a Go source file.
///
/// Leading blank lines and comments (including build constraints) are
/// skipped. The comment must start on the same line as the clause; a block
/// comment must also end there.
pub fn find_import_comment(src: &str) -> Option<String> {
    let rest = skip_space_and_comments(src);
    let (keyword, rest) = take_word(rest);
    if keyword != "package" {
        return None;
    }
    let (name, rest) = take_word(skip_space_and_comments(rest));
    if name.is_empty() {
        return None;
    }

    let rest = rest.trim_start_matches([' ', '\t', '\r']);
    let comment = if let Some(body) = rest.strip_prefix("//") {
        body.split('\n').next().unwrap_or_default()
    } else if let Some(body) = rest.strip_prefix("/*") {
        let (comment, _) = body.split_once("*/")?;
        if comment.contains('\n') {
            return None;
        }
        comment
    } else {
        return None;
    };

    let (word, arg) = take_word(comment.trim());
    if word != "import" {
        return None;
    }
    unquote(arg.trim())
}

/// Skip whitespace, `// line` and `/* block */` comments.
fn skip_space_and_comments(mut s: &str) -> &str {
    loop {
        s = s.trim_start();
        if let Some(rest) = s.strip_prefix("//") {
            s = rest.split_once('\n').map(|(_, after)| after).unwrap_or_default();
        } else if let Some(rest) = s.strip_prefix("/*") {
            match rest.split_once("*/") {
                Some((_, after)) => s = after,
                None => return "",
            }
        } else {
            return s;
        }
    }
}

/// Split off a leading identifier (letters, digits, `_`).
fn take_word(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(s.len());
    s.split_at(end)
}

/// Accept `"path"` or `` `path` ``. Escapes never occur in import paths and
/// are rejected along with empty paths.
fn unquote(s: &str) -> Option<String> {
    let inner = s
        .strip_prefix('"')
        .and_then(|r| r.strip_suffix('"'))
        .filter(|r| !r.contains(['"', '\\']))
        .or_else(|| {
            s.strip_prefix('`')
                .and_then(|r| r.strip_suffix('`'))
                .filter(|r| !r.contains('`'))
        })?;
    if inner.is_empty() {
        None
    } else {
        Some(inner.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn line_comment() {
        let src = "package uuenc // import \"rtrn.io/cmd/uuenc\"\n\nfunc main() {}\n";
        assert_eq!(find_import_comment(src).as_deref(), Some("rtrn.io/cmd/uuenc"));
    }

    #[test]
    fn block_comment() {
        let src = "package uuenc /* import \"rtrn.io/cmd/uuenc\" */\n";
        assert_eq!(find_import_comment(src).as_deref(), Some("rtrn.io/cmd/uuenc"));
    }

    #[test]
    fn backquoted_path() {
        let src = "package x // import `example.com/x`\n";
        assert_eq!(find_import_comment(src).as_deref(), Some("example.com/x"));
    }

    #[test]
    fn leading_comments_and_build_tags_skipped() {
        let src = "// Copyright notice.\n\n//go:build linux\n\n/*\nPackage doc.\n*/\npackage x // import \"example.com/x\"\n";
        assert_eq!(find_import_comment(src).as_deref(), Some("example.com/x"));
    }

    #[test]
    fn ordinary_comment_is_not_import() {
        assert_eq!(find_import_comment("package x // a comment\n"), None);
    }

    #[test]
    fn comment_on_next_line_ignored() {
        assert_eq!(
            find_import_comment("package x\n// import \"example.com/x\"\n"),
            None
        );
    }

    #[test]
    fn multiline_block_comment_ignored() {
        assert_eq!(
            find_import_comment("package x /* import\n\"example.com/x\" */\n"),
            None
        );
    }

    #[test]
    fn no_package_clause() {
        assert_eq!(find_import_comment("// just a comment\n"), None);
        assert_eq!(find_import_comment(""), None);
    }

    #[test]
    fn unterminated_quote_rejected() {
        assert_eq!(find_import_comment("package x // import \"example.com/x\n"), None);
    }

    #[test]
    fn crlf_line_endings() {
        let src = "package x // import \"example.com/x\"\r\n";
        assert_eq!(find_import_comment(src).as_deref(), Some("example.com/x"));
    }

    #[test]
    fn inspector_reads_first_commented_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.go"), "package x\n").unwrap();
        fs::write(
            tmp.path().join("b.go"),
            "package x // import \"example.com/x\"\n",
        )
        .unwrap();
        fs::write(
            tmp.path().join("c.go"),
            "package x // import \"example.com/other\"\n",
        )
        .unwrap();
        let found = GoSourceInspector.import_comment(tmp.path()).unwrap();
        assert_eq!(found.as_deref(), Some("example.com/x"));
    }

    #[test]
    fn inspector_ignores_tests_and_hidden_files() {
        let tmp = TempDir::new().unwrap();
        for name in ["x_test.go", "_gen.go", ".hidden.go", "notes.txt"] {
            fs::write(
                tmp.path().join(name),
                "package x // import \"example.com/x\"\n",
            )
            .unwrap();
        }
        assert_eq!(GoSourceInspector.import_comment(tmp.path()).unwrap(), None);
    }

    #[test]
    fn inspector_empty_directory() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(GoSourceInspector.import_comment(tmp.path()).unwrap(), None);
    }

    #[test]
    fn inspector_skips_directories_named_like_sources() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("a.go")).unwrap();
        fs::write(
            tmp.path().join("b.go"),
            "package x // import \"example.com/x\"\n",
        )
        .unwrap();
        let found = GoSourceInspector.import_comment(tmp.path()).unwrap();
        assert_eq!(found.as_deref(), Some("example.com/x"));
    }

    #[test]
    fn inspector_listing_error_is_reported() {
        let tmp = TempDir::new().unwrap();
        let err = GoSourceInspector
            .import_comment(&tmp.path().join("gone"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
