//! Content documents read from a local directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use folio_core::{Error, Result};

use crate::source::ContentSource;

/// Reads documents from `<dir>/<name>`.
#[derive(Clone, Debug)]
pub struct FsSource {
    dir: PathBuf,
}

impl FsSource {
    /// Create a source rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The content directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl ContentSource for FsSource {
    async fn fetch(&self, name: &str) -> Result<Option<String>> {
        let path = self.dir.join(name);
        match tokio::fs::read(&path).await {
            // Invalid UTF-8 is replaced rather than rejected; the scanner copes.
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No document at {}", path.display());
                Ok(None)
            }
            Err(e) => Err(Error::io_with_path(e, &path)),
        }
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}
