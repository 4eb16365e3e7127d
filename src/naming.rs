//! Import path naming helpers.
//!
//! Import paths are slash-separated regardless of platform:
//! `rtrn.io/cmd/govanity` is the root domain `rtrn.io` followed by the key
//! `cmd/govanity`. Everything here works on those strings, never on
//! filesystem paths.

/// Join a root domain and an import key.
///
/// - `Some("rtrn.io")`, `"cmd/foo"` → `"rtrn.io/cmd/foo"`
/// - `None`, `"cmd/foo"` → `"cmd/foo"`
/// - `Some("rtrn.io/")`, `"/cmd/foo"` → `"rtrn.io/cmd/foo"`
/// - `Some("")`, `"cmd/foo"` → `"cmd/foo"`
pub fn join_import_path(root: Option<&str>, key: &str) -> String {
    match root.map(|r| r.trim_end_matches('/')) {
        Some(r) if !r.is_empty() => {
            let key = key.trim_start_matches('/');
            if key.is_empty() {
                r.to_string()
            } else {
                format!("{r}/{key}")
            }
        }
        _ => key.to_string(),
    }
}

/// The element after the final `/`, or the whole path if there is none.
///
/// - `"cmd/foo"` → `"foo"`
/// - `"foo"` → `"foo"`
/// - `"cmd/foo/"` → `"foo"`
pub fn last_segment(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(pos) => &trimmed[pos + 1..],
        None => trimmed,
    }
}

/// Drop the first `/`-delimited element (the root domain).
///
/// A path without `/` is returned unchanged.
///
/// - `"rtrn.io/cmd/foo"` → `"cmd/foo"`
/// - `"rtrn.io"` → `"rtrn.io"`
pub fn strip_root_segment(path: &str) -> &str {
    match path.split_once('/') {
        Some((_, rest)) => rest,
        None => path,
    }
}

/// The part of `path` below `prefix`, including the leading `/`.
///
/// Returns `None` unless `prefix` is an ancestor of `path` at an element
/// boundary, so `rtrn.io/cmd/foobar` is not below `rtrn.io/cmd/foo`.
pub fn suffix_below<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(prefix)?;
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}
