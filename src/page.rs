//! HTML page rendering.
//!
//! Each import path is served by one small static page. The `go` tool reads
//! the `go-import` meta tag; browsers follow the refresh tag to the
//! documentation. Two fixed layouts exist:
//!
//! ```text
//! <!DOCTYPE html>                          <!DOCTYPE html>
//! <html>                                   <html>
//! <head>                                   <head>
//! <meta charset="utf-8">                   <meta charset="utf-8">
//! <meta name="go-import" content="...">    <meta name="go-import" content="...">
//! <meta http-equiv="refresh" ...>          </head>
//! </head>                                  </html>
//! <body>
//! Redirecting to <a href="...">...</a>...
//! </body>
//! </html>
//! ```
//!
//! The left one is used when the entry has a redirect, the right one when
//! the redirect is empty. Output is byte-for-byte stable for the same input,
//! which the writer relies on to skip unchanged files.
//!
//! Uses [maud](https://maud.lambda.xyz/); all interpolated values are
//! HTML-escaped. Line breaks are emitted explicitly to keep the pages
//! readable and diff-friendly.

use crate::types::ResolvedEntry;
use maud::{DOCTYPE, Markup, html};

/// The values a page is rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageData<'a> {
    /// Import prefix announced to the `go` tool.
    pub import: &'a str,
    pub vcs: &'a str,
    pub repo: &'a str,
    /// Documentation URL; empty selects the layout without redirect.
    pub redirect: &'a str,
}

impl<'a> From<&'a ResolvedEntry> for PageData<'a> {
    fn from(entry: &'a ResolvedEntry) -> Self {
        Self {
            import: &entry.import_prefix,
            vcs: &entry.vcs,
            repo: &entry.repo,
            redirect: &entry.redirect,
        }
    }
}

/// Render the page for `data`.
pub fn render_page(data: &PageData) -> String {
    let markup = if data.redirect.is_empty() {
        render_without_redirect(data)
    } else {
        render_with_redirect(data)
    };
    markup.into_string()
}

fn go_import_content(data: &PageData) -> String {
    format!("{} {} {}", data.import, data.vcs, data.repo)
}

fn render_with_redirect(data: &PageData) -> Markup {
    html! {
        (DOCTYPE) "\n"
        html {
            "\n"
            head {
                "\n"
                meta charset="utf-8"; "\n"
                meta name="go-import" content=(go_import_content(data)); "\n"
                meta http-equiv="refresh" content={ "0; url=" (data.redirect) }; "\n"
            }
            "\n"
            body {
                "\nRedirecting to "
                a href=(data.redirect) { (data.redirect) }
                "...\n"
            }
            "\n"
        }
        "\n"
    }
}

fn render_without_redirect(data: &PageData) -> Markup {
    html! {
        (DOCTYPE) "\n"
        html {
            "\n"
            head {
                "\n"
                meta charset="utf-8"; "\n"
                meta name="go-import" content=(go_import_content(data)); "\n"
            }
            "\n"
        }
        "\n"
    }
}
