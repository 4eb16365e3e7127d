//! Idempotent page output.
//!
//! A page for import path `rtrn.io/cmd/govanity` is written to
//! `<output>/cmd/govanity/index.html`: the root domain is the site itself,
//! so its segment is dropped.
//!
//! The existing file is compared before writing and left alone when the
//! content is identical. Re-running on an unchanged configuration touches
//! nothing, so modification times stay put and rsync-style deploys only see
//! real changes.

use crate::naming;
use crate::output;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of every generated page.
pub const PAGE_FILENAME: &str = "index.html";

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

trait IoResultExt<T> {
    fn at(self, path: &Path) -> Result<T, WriteError>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn at(self, path: &Path) -> Result<T, WriteError> {
        self.map_err(|source| WriteError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// What happened to a page file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file did not exist.
    Created,
    /// The file existed with different content.
    Updated,
    /// The file already had this content; nothing was written.
    Unchanged,
}

/// Result of writing one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteEvent {
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

/// Location of the page for `import_path` below `out_dir`.
pub fn page_path(out_dir: &Path, import_path: &str) -> PathBuf {
    naming::strip_root_segment(import_path)
        .split('/')
        .filter(|s| !s.is_empty())
        .fold(out_dir.to_path_buf(), |dir, segment| dir.join(segment))
        .join(PAGE_FILENAME)
}

/// Writes pages into an output directory.
#[derive(Debug, Clone)]
pub struct PageWriter {
    out_dir: PathBuf,
    verbose: bool,
}

impl PageWriter {
    pub fn new(out_dir: impl Into<PathBuf>, verbose: bool) -> Self {
        Self {
            out_dir: out_dir.into(),
            verbose,
        }
    }

    /// Write `content` as the page for `import_path`, unless it is already there.
    ///
    /// In verbose mode a `creating` or `updating` line is printed before the
    /// write. Read errors other than a missing file are reported, not treated
    /// as absence.
    pub fn write(&self, import_path: &str, content: &str) -> Result<WriteEvent, WriteError> {
        let path = page_path(&self.out_dir, import_path);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).at(dir)?;
        }

        let outcome = match fs::read(&path) {
            Ok(old) if old == content.as_bytes() => WriteOutcome::Unchanged,
            Ok(_) => WriteOutcome::Updated,
            Err(e) if e.kind() == io::ErrorKind::NotFound => WriteOutcome::Created,
            Err(e) => return Err(WriteError::Io { path, source: e }),
        };

        let event = WriteEvent { path, outcome };
        if outcome == WriteOutcome::Unchanged {
            return Ok(event);
        }
        if self.verbose {
            output::print_write_event(&event);
        }
        fs::write(&event.path, content).at(&event.path)?;
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    #[test]
    fn page_path_strips_root_segment() {
        let p = page_path(Path::new("out"), "rtrn.io/cmd/govanity");
        assert_eq!(p, Path::new("out").join("cmd").join("govanity").join("index.html"));
    }

    #[test]
    fn page_path_for_bare_key() {
        let p = page_path(Path::new("out"), "tool");
        assert_eq!(p, Path::new("out").join("tool").join("index.html"));
    }

    #[test]
    fn write_creates_directories_and_file() {
        let tmp = TempDir::new().unwrap();
        let writer = PageWriter::new(tmp.path(), false);
        let event = writer.write("rtrn.io/cmd/govanity", "hello").unwrap();
        assert_eq!(event.outcome, WriteOutcome::Created);
        assert_eq!(
            fs::read_to_string(tmp.path().join("cmd/govanity/index.html")).unwrap(),
            "hello"
        );
    }

    #[test]
    fn write_existing_directory_is_fine() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("cmd/govanity")).unwrap();
        let writer = PageWriter::new(tmp.path(), false);
        let event = writer.write("rtrn.io/cmd/govanity", "hello").unwrap();
        assert_eq!(event.outcome, WriteOutcome::Created);
    }

    #[test]
    fn write_same_content_is_unchanged() {
        let tmp = TempDir::new().unwrap();
        let writer = PageWriter::new(tmp.path(), false);
        writer.write("rtrn.io/a", "same").unwrap();

        let path = page_path(tmp.path(), "rtrn.io/a");
        let past = SystemTime::now() - Duration::from_secs(3600);
        fs::File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(past)
            .unwrap();

        let event = writer.write("rtrn.io/a", "same").unwrap();
        assert_eq!(event.outcome, WriteOutcome::Unchanged);
        assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), past);
    }

    #[test]
    fn write_different_content_is_updated() {
        let tmp = TempDir::new().unwrap();
        let writer = PageWriter::new(tmp.path(), false);
        writer.write("rtrn.io/a", "old").unwrap();
        let event = writer.write("rtrn.io/a", "new").unwrap();
        assert_eq!(event.outcome, WriteOutcome::Updated);
        assert_eq!(
            fs::read_to_string(page_path(tmp.path(), "rtrn.io/a")).unwrap(),
            "new"
        );
    }

    #[test]
    fn unreadable_existing_page_is_error() {
        let tmp = TempDir::new().unwrap();
        // a directory where the page should be cannot be read as a file
        fs::create_dir_all(tmp.path().join("a/index.html")).unwrap();
        let writer = PageWriter::new(tmp.path(), false);
        let err = writer.write("rtrn.io/a", "x").unwrap_err();
        let WriteError::Io { path, .. } = err;
        assert!(path.ends_with("a/index.html"));
    }

    #[test]
    fn error_message_names_path() {
        let err = WriteError::Io {
            path: PathBuf::from("out/a/index.html"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "out/a/index.html: denied");
    }
}
