//! Frontmatter scanning and inline markup for Folio content files.
//!
//! This crate is the pure half of Folio: it turns raw document text into a
//! [`Frontmatter`] mapping and never touches a page. Applying the mapping is
//! the job of `folio-page`.
//!
//! # Modules
//!
//! - [`markdown`]: Frontmatter scanning and inline markup
//!   - [`markdown::frontmatter`]: flat and multiline field scanner
//!   - [`markdown::markup`]: `**bold**`, `*italic*` and line breaks to HTML
//! - [`site`]: Page sections and the content loaded for them
//!
//! # Example
//!
//! ```rust
//! use folio_content::scan_frontmatter;
//!
//! let content = "---\nheroName: Ada\nheroTitle: 'Analyst'\n---\n\nBody";
//! let fm = scan_frontmatter(content);
//! assert_eq!(fm.get("heroName"), Some("Ada"));
//! assert_eq!(fm.get("heroTitle"), Some("Analyst"));
//! assert_eq!(fm.get("missing"), None);
//! ```

pub mod markdown;
pub mod site;

// Re-export commonly used types
pub use markdown::{Frontmatter, escape_html, markdown_to_html, scan_frontmatter};
pub use site::{Section, SiteContent};
