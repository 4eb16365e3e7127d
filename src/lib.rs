//! # govanity
//!
//! Generates static HTML pages that let a custom domain act as a vanity
//! import path for Go packages. Each page carries a `go-import` meta tag
//! pointing the `go` tool at the real repository, plus an optional refresh
//! redirect sending browsers to the documentation.
//!
//! ```text
//! govanity.cfg  ─►  rtrn.io/cmd/govanity  ─►  <output>/cmd/govanity/index.html
//! ```
//!
//! The output directory can be published as-is, e.g. on GitHub Pages.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Loads the TOML configuration: one `[default]` table and `[import."<path>"]` tables |
//! | [`resolve`] | Applies defaults field by field and expands the `*` / `$` placeholders |
//! | [`scan`] | Locates an import's source in the Go workspace and discovers nested packages |
//! | [`gosrc`] | Reads the import comment from a package's `.go` files |
//! | [`page`] | Renders the two fixed page layouts with Maud |
//! | [`write`] | Writes pages, skipping files whose content is unchanged |
//! | [`generate`] | Runs resolve → render/write → discover for every entry |
//! | [`output`] | Verbose and summary line formatting |
//! | [`naming`] | Import path string helpers |
//! | [`types`] | [`ResolvedEntry`](types::ResolvedEntry), shared between stages |
//!
//! # Design Decisions
//!
//! ## Unset Is Not Empty
//!
//! Every configuration field is an `Option`. An absent key inherits from
//! `[default]`; an empty one is a value in its own right. This matters for
//! `redirect`: leaving it out keeps the documentation redirect, setting it to
//! `""` removes it.
//!
//! ## Resolve Everything First
//!
//! All entries are resolved before anything is written. A typo in the last
//! import fails the run without leaving a half-updated output directory.
//!
//! ## Write Only What Changed
//!
//! The writer compares against the existing file and skips identical
//! content. Regenerating is cheap and leaves modification times alone, which
//! keeps deploys that sync by timestamp or diff quiet.

pub mod config;
pub mod generate;
pub mod gosrc;
pub mod naming;
pub mod output;
pub mod page;
pub mod resolve;
pub mod scan;
pub mod types;
pub mod write;

#[cfg(test)]
pub(crate) mod test_helpers;
