//! Site sections and the content loaded for them.
//!
//! A site is described by a fixed set of CMS documents, one per [`Section`].
//! [`SiteContent`] holds whatever was scanned from each; a missing document
//! is simply `None`.

use std::fmt;

use serde::Serialize;

use crate::markdown::Frontmatter;

/// A CMS-managed section of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Name, email address, and profile image.
    Personal,
    /// Hero banner text and call-to-action button.
    Hero,
    /// Long-form "about" text.
    About,
    /// Site title, theme, and meta description.
    Settings,
}

impl Section {
    /// Every section, in the order they are applied to a page.
    pub const ALL: [Section; 4] = [
        Section::Personal,
        Section::Hero,
        Section::About,
        Section::Settings,
    ];

    /// Lowercase section name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Hero => "hero",
            Self::About => "about",
            Self::Settings => "settings",
        }
    }

    /// Name of the markdown document holding this section.
    pub fn file_name(self) -> String {
        format!("{}.md", self.name())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Frontmatter scanned for each section, if its document was available.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SiteContent {
    /// `personal.md`
    pub personal: Option<Frontmatter>,
    /// `hero.md`
    pub hero: Option<Frontmatter>,
    /// `about.md`
    pub about: Option<Frontmatter>,
    /// `settings.md`
    pub settings: Option<Frontmatter>,
}

impl SiteContent {
    /// Frontmatter for a section, if it was loaded.
    pub fn get(&self, section: Section) -> Option<&Frontmatter> {
        match section {
            Section::Personal => self.personal.as_ref(),
            Section::Hero => self.hero.as_ref(),
            Section::About => self.about.as_ref(),
            Section::Settings => self.settings.as_ref(),
        }
    }

    /// Store (or clear) the frontmatter for a section.
    pub fn set(&mut self, section: Section, frontmatter: Option<Frontmatter>) {
        let slot = match section {
            Section::Personal => &mut self.personal,
            Section::Hero => &mut self.hero,
            Section::About => &mut self.about,
            Section::Settings => &mut self.settings,
        };
        *slot = frontmatter;
    }

    /// Sections whose documents were loaded, in application order.
    pub fn loaded_sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| self.get(*s).is_some())
            .collect()
    }

    /// Check if no section was loaded.
    pub fn is_empty(&self) -> bool {
        self.loaded_sections().is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
