//! The [`ContentSource`] abstraction.

use async_trait::async_trait;
use folio_core::Result;

use crate::fs::FsSource;
use crate::http::HttpSource;

/// Somewhere content documents can be fetched from.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch the document called `name` (for example `hero.md`).
    ///
    /// Returns `Ok(None)` when the document does not exist. Errors are
    /// reserved for transport and I/O failures.
    async fn fetch(&self, name: &str) -> Result<Option<String>>;

    /// Human-readable location, for logging.
    fn describe(&self) -> String;
}

/// Pick a source for a configured location.
///
/// `http://` and `https://` locations are fetched over HTTP; anything else
/// is treated as a directory path.
pub fn source_for(location: &str) -> Box<dyn ContentSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FsSource::new(location))
    }
}
