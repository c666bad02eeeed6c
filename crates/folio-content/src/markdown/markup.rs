//! Minimal inline markdown to HTML conversion.
//!
//! Long-form CMS fields (such as an "about" blurb) carry a little inline
//! formatting. This is not a CommonMark renderer; it handles exactly:
//!
//! - `**bold**` → `<strong>bold</strong>`
//! - `*italic*` → `<em>italic</em>`
//! - a blank line → paragraph break
//! - a single newline → `<br>`
//!
//! The input is HTML-escaped first, so authored text can never inject markup.

use std::sync::LazyLock;

use regex::Regex;

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("Invalid bold regex"));

static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("Invalid italic regex"));

/// Convert a block of lightly formatted text to an HTML fragment.
///
/// The result is always wrapped in a single `<p>…</p>`; blank lines close
/// and reopen the paragraph.
///
/// # Example
///
/// ```rust
/// use folio_content::markdown::markdown_to_html;
///
/// let html = markdown_to_html("I build **fast** things.\n\nMostly *Rust*.");
/// assert_eq!(
///     html,
///     "<p>I build <strong>fast</strong> things.</p><p>Mostly <em>Rust</em>.</p>"
/// );
/// ```
pub fn markdown_to_html(text: &str) -> String {
    let escaped = escape_html(text);
    let bold = BOLD_RE.replace_all(&escaped, "<strong>$1</strong>");
    let italic = ITALIC_RE.replace_all(&bold, "<em>$1</em>");
    let body = italic.replace("\n\n", "</p><p>").replace('\n', "<br>");
    format!("<p>{body}</p>")
}

/// Escape the characters that are significant in HTML text and attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
