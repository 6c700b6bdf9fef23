//! Escaping boundary between note data and page markup.
//!
//! Note titles and bodies come from the remote store and are untrusted.
//! Templates only accept [`Markup`], which can be built from note data in two
//! ways: [`Markup::escape`] for plain text and [`Markup::markdown`] for note
//! bodies, which are rendered and then sanitized.

use pulldown_cmark::{Options, Parser};
use std::fmt;

/// HTML that is safe to splice into a page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Markup(String);

impl Markup {
    /// Escape plain text.
    pub fn escape(text: &str) -> Self {
        Self(html_escape(text))
    }

    /// Render markdown and strip anything dangerous from the result.
    pub fn markdown(source: &str) -> Self {
        Self(render_markdown(source))
    }

    /// Markup written by this crate, never by note authors. Not reachable
    /// from outside the crate:
    ///
    /// ```compile_fail
    /// let _ = notes_client::Markup::trusted("<script>alert(1)</script>");
    /// ```
    pub(crate) fn trusted(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(content, options);
    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, parser);
    // Raw HTML inside markdown passes through the parser untouched
    ammonia::clean(&html_output)
}
