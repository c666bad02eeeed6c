//! Fetching and scanning every page section.

use folio_content::{Frontmatter, Section, SiteContent, scan_frontmatter};
use folio_core::Result;

use crate::source::ContentSource;

/// Fetch and scan the document for one section.
///
/// `Ok(None)` means the document was not available.
pub async fn load_section(
    source: &dyn ContentSource,
    section: Section,
) -> Result<Option<Frontmatter>> {
    let name = section.file_name();
    let Some(text) = source.fetch(&name).await? else {
        log::info!("No {name} in {}, keeping page defaults", source.describe());
        return Ok(None);
    };

    let frontmatter = scan_frontmatter(&text);
    if frontmatter.is_empty() {
        log::warn!("{name} has no frontmatter fields");
    } else {
        log::debug!("Scanned {} field(s) from {name}", frontmatter.len());
    }
    Ok(Some(frontmatter))
}

/// Fetch every section concurrently and scan each document.
///
/// Missing documents leave their section empty. A section whose fetch fails
/// is logged and left empty while the others are kept. Only when every
/// section fails is the first error returned, so the caller can fall back to
/// the page as rendered.
pub async fn load_site_content(source: &dyn ContentSource) -> Result<SiteContent> {
    let (personal, hero, about, settings) = tokio::join!(
        load_section(source, Section::Personal),
        load_section(source, Section::Hero),
        load_section(source, Section::About),
        load_section(source, Section::Settings),
    );

    let mut content = SiteContent::default();
    let mut errors = Vec::new();
    for (section, result) in Section::ALL.into_iter().zip([personal, hero, about, settings]) {
        match result {
            Ok(frontmatter) => content.set(section, frontmatter),
            Err(e) => {
                log::warn!("Could not load {section} from {}: {e}", source.describe());
                errors.push(e);
            }
        }
    }

    let all_failed = errors.len() == Section::ALL.len();
    if let Some(err) = errors.into_iter().next().filter(|_| all_failed) {
        return Err(err);
    }

    log::info!(
        "Loaded {}/{} section(s) from {}",
        content.loaded_sections().len(),
        Section::ALL.len(),
        source.describe()
    );
    Ok(content)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use folio_core::Error;
    use std::collections::HashMap;

    /// In-memory source; names listed in `broken` fail with an HTTP error.
    #[derive(Default)]
    struct MemorySource {
        docs: HashMap<String, String>,
        broken: Vec<String>,
    }

    impl MemorySource {
        fn with(mut self, name: &str, text: &str) -> Self {
            self.docs.insert(name.to_string(), text.to_string());
            self
        }

        fn broken(mut self, name: &str) -> Self {
            self.broken.push(name.to_string());
            self
        }
    }

    #[async_trait]
    impl ContentSource for MemorySource {
        async fn fetch(&self, name: &str) -> Result<Option<String>> {
            if self.broken.iter().any(|b| b == name) {
                return Err(Error::http(format!("{name} unreachable")));
            }
            Ok(self.docs.get(name).cloned())
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }

    #[tokio::test]
    async fn test_load_section_scans_document() {
        let source = MemorySource::default().with("hero.md", "---\nheroName: Ada\n---");
        let fm = load_section(&source, Section::Hero).await.unwrap().unwrap();
        assert_eq!(fm.get("heroName"), Some("Ada"));
    }

    #[tokio::test]
    async fn test_load_section_missing() {
        let source = MemorySource::default();
        assert!(load_section(&source, Section::About).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_section_without_frontmatter_is_empty_mapping() {
        let source = MemorySource::default().with("about.md", "# Just a heading");
        let fm = load_section(&source, Section::About).await.unwrap().unwrap();
        assert!(fm.is_empty());
    }

    #[tokio::test]
    async fn test_load_site_content_partial() {
        let source = MemorySource::default()
            .with("personal.md", "---\nfullName: Ada Lovelace\n---")
            .with("settings.md", "---\ncolorScheme: dark\n---");

        let content = load_site_content(&source).await.unwrap();
        assert_eq!(
            content.loaded_sections(),
            vec![Section::Personal, Section::Settings]
        );
        assert_eq!(
            content.settings.as_ref().and_then(|fm| fm.get("colorScheme")),
            Some("dark")
        );
        assert!(content.hero.is_none());
    }

    #[tokio::test]
    async fn test_load_site_content_keeps_sections_that_loaded() {
        let source = MemorySource::default()
            .with("personal.md", "---\nfullName: Ada\n---")
            .with("about.md", "---\naboutText: Hi\n---")
            .broken("about.md");

        let content = load_site_content(&source).await.unwrap();
        assert_eq!(content.loaded_sections(), vec![Section::Personal]);
        assert!(content.about.is_none());
    }

    #[tokio::test]
    async fn test_load_site_content_all_sections_failing_is_error() {
        let source = MemorySource::default()
            .broken("personal.md")
            .broken("hero.md")
            .broken("about.md")
            .broken("settings.md");

        let err = load_site_content(&source).await.unwrap_err();
        assert!(err.to_string().contains("personal.md unreachable"));
    }
}
