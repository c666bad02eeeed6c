//! Applies scanned content to an already-rendered HTML page.
//!
//! This is the explicit *apply* step that follows scanning. Nothing here
//! fetches or parses documents; each binding receives a
//! [`Frontmatter`](folio_content::Frontmatter) and returns a rewritten page.
//!
//! # Modules
//!
//! - [`bindings`]: Per-section field → selector bindings
//! - [`rewrite`]: Selector-driven streaming HTML rewriting
//!
//! # Example
//!
//! ```rust
//! use folio_content::{Section, SiteContent, scan_frontmatter};
//! use folio_page::apply_site_content;
//!
//! let mut content = SiteContent::default();
//! content.set(Section::Hero, Some(scan_frontmatter("---\nheroName: Ada\n---")));
//!
//! let page = r#"<h1 class="hero-name">Your Name</h1>"#;
//! let out = apply_site_content(page, &content).unwrap();
//! assert_eq!(out, r#"<h1 class="hero-name">Ada</h1>"#);
//! ```

pub mod bindings;
pub mod rewrite;

use folio_content::{Frontmatter, Section, SiteContent};
use folio_core::Result;

pub use bindings::{apply_about, apply_hero, apply_personal, apply_settings};

/// Apply one section's frontmatter to the page.
pub fn apply_section(html: &str, section: Section, fm: &Frontmatter) -> Result<String> {
    match section {
        Section::Personal => apply_personal(html, fm),
        Section::Hero => apply_hero(html, fm),
        Section::About => apply_about(html, fm),
        Section::Settings => apply_settings(html, fm),
    }
}

/// Apply every loaded section, in [`Section::ALL`] order.
///
/// Sections are applied one after another, so a later section overrides an
/// earlier one where their targets overlap (the hero name wins over the
/// personal full name on the first `.hero-name`).
pub fn apply_site_content(html: &str, content: &SiteContent) -> Result<String> {
    let mut page = html.to_string();
    for section in Section::ALL {
        if let Some(fm) = content.get(section) {
            log::debug!("Applying {section} section ({} field(s))", fm.len());
            page = apply_section(&page, section, fm)?;
        }
    }
    Ok(page)
}

// ============================================================================
// Tests
// ============================================================================
