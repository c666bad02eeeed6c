//! # folio-loader
//!
//! Fetches the CMS documents behind each page section and scans them.
//!
//! This crate is the *fetch* half of Folio:
//! - [`ContentSource`] abstracts where documents live
//! - [`FsSource`] reads from a content directory
//! - [`HttpSource`] fetches from a base URL
//! - [`load_site_content`] fetches every section concurrently and scans each
//!   with [`folio_content::scan_frontmatter`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod fs;
pub mod http;
pub mod load;
pub mod source;

pub use fs::FsSource;
pub use http::HttpSource;
pub use load::{load_section, load_site_content};
pub use source::{ContentSource, source_for};
