//! Frontmatter scanning and inline markup for CMS content files.
//!
//! - [`frontmatter`]: line-based scanner for flat and multiline fields
//! - [`markup`]: inline markdown (bold, italic, breaks) to HTML
//!
//! # Example
//!
//! ```rust
//! use folio_content::markdown::{markdown_to_html, scan_frontmatter};
//!
//! let content = "---\naboutText: |\n  Hello **world**\n---\n";
//! let fm = scan_frontmatter(content);
//!
//! let about = fm.get("aboutText").unwrap();
//! assert_eq!(markdown_to_html(about), "<p>Hello <strong>world</strong></p>");
//! ```

pub mod frontmatter;
pub mod markup;

mod proptests;

// Re-export key types and functions
pub use frontmatter::{Frontmatter, scan_frontmatter};
pub use markup::{escape_html, markdown_to_html};
