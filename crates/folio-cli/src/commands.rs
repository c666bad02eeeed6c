//! Implementations of the `scan` and `render` subcommands.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use folio_content::{Frontmatter, scan_frontmatter};
use folio_core::{Error, Result};
use folio_loader::{ContentSource, load_site_content, source_for};
use serde::Serialize;

use crate::cli::{RenderArgs, ScanArgs};
use crate::config::FolioConfig;

// ============================================================================
// scan
// ============================================================================

/// Read and scan one markdown file.
///
/// Invalid UTF-8 is decoded lossily, as `render` does.
pub fn scan_file(path: &Path) -> Result<Frontmatter> {
    let bytes = std::fs::read(path).map_err(|e| Error::io_with_path(e, path))?;
    let frontmatter = scan_frontmatter(&String::from_utf8_lossy(&bytes));
    tracing::debug!("{}: {} field(s)", path.display(), frontmatter.len());
    Ok(frontmatter)
}

/// Scan `files` and render the result as JSON.
///
/// A single file yields its field mapping; several files yield an object
/// keyed by path.
pub fn scan_to_json(files: &[PathBuf], pretty: bool) -> Result<String> {
    match files {
        [single] => to_json(&scan_file(single)?, pretty),
        _ => {
            let mut all = BTreeMap::new();
            for path in files {
                all.insert(path.display().to_string(), scan_file(path)?);
            }
            to_json(&all, pretty)
        }
    }
}

/// Handle `folio scan`.
pub fn cmd_scan(args: &ScanArgs) -> Result<()> {
    println!("{}", scan_to_json(&args.files, args.pretty)?);
    Ok(())
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    out.map_err(|e| Error::serialization(e.to_string()))
}

// ============================================================================
// render
// ============================================================================

/// Where `render` reads from and writes to, after flags override config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTargets {
    /// Page to patch.
    pub page: PathBuf,
    /// Content directory or base URL.
    pub content: String,
    /// Output file; stdout when `None`.
    pub output: Option<PathBuf>,
}

impl RenderTargets {
    /// Resolve targets, preferring command-line flags over configuration.
    pub fn resolve(config: &FolioConfig, args: &RenderArgs) -> Self {
        Self {
            page: PathBuf::from(args.page.as_deref().unwrap_or(&config.page.input)),
            content: args
                .content
                .clone()
                .unwrap_or_else(|| config.content.location.clone()),
            output: args
                .output
                .as_deref()
                .or(config.page.output.as_deref())
                .map(PathBuf::from),
        }
    }
}

/// Load every section from `source` and apply it to `html`.
///
/// When content cannot be loaded the page is returned unchanged, so it keeps
/// its built-in defaults.
pub async fn render_page(html: &str, source: &dyn ContentSource) -> Result<String> {
    match load_site_content(source).await {
        Ok(content) => folio_page::apply_site_content(html, &content),
        Err(e) => {
            tracing::warn!("Content not available, using defaults: {e}");
            Ok(html.to_string())
        }
    }
}

/// Handle `folio render`.
pub async fn cmd_render(config: &FolioConfig, args: &RenderArgs) -> Result<()> {
    let targets = RenderTargets::resolve(config, args);
    tracing::info!(
        "Rendering {} with content from {}",
        targets.page.display(),
        targets.content
    );

    let html = tokio::fs::read_to_string(&targets.page)
        .await
        .map_err(|e| Error::io_with_path(e, &targets.page))?;

    let source = source_for(&targets.content);
    let rendered = render_page(&html, source.as_ref()).await?;

    match &targets.output {
        Some(path) => {
            tokio::fs::write(path, rendered)
                .await
                .map_err(|e| Error::io_with_path(e, path))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
