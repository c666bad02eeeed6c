//! Common fixtures for Folio integration tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A template page using every class the bindings know about.
pub const TEMPLATE_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Your Site</title>
<meta name="description" content="A personal site">
</head>
<body>
<header><span class="site-title">Your Site</span></header>
<section class="hero">
<img class="hero-image" src="placeholder.png">
<h1 class="hero-name">Your Name</h1>
<p class="hero-title">Your Title</p>
<p class="hero-tagline">Your tagline</p>
<p class="hero-subtitle">Your subtitle</p>
<a class="hero-button" href="#">Learn more</a>
</section>
<aside>
<img class="profile-image" src="placeholder.png">
<span class="profile-name">Your Name</span>
<a href="mailto:you@example.com">you@example.com</a>
</aside>
<section class="about"><div class="about-text"><p>About you.</p></div></section>
</body>
</html>
"##;

/// A temporary site: a content directory plus a page file.
pub struct SiteFixture {
    dir: TempDir,
}

impl SiteFixture {
    /// Creates an empty content directory and writes the template page.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        std::fs::create_dir(dir.path().join("content")).expect("create content dir");
        std::fs::write(dir.path().join("index.html"), TEMPLATE_PAGE).expect("write page");
        Self { dir }
    }

    /// Adds a content document, returning `self` for chaining.
    pub fn with_doc(self, name: &str, text: &str) -> Self {
        std::fs::write(self.content_dir().join(name), text).expect("write doc");
        self
    }

    /// Directory holding the content documents.
    pub fn content_dir(&self) -> PathBuf {
        self.dir.path().join("content")
    }

    /// Path to the template page.
    pub fn page(&self) -> PathBuf {
        self.dir.path().join("index.html")
    }

    /// Scratch path inside the fixture.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Root of the fixture.
    #[allow(dead_code)]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for SiteFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A complete set of section documents.
pub fn full_site() -> SiteFixture {
    SiteFixture::new()
        .with_doc(
            "personal.md",
            "---\nfullName: Ada Lovelace\nemail: ada@example.com\nprofileImage: /img/ada.jpg\n---\n",
        )
        .with_doc(
            "hero.md",
            "---\nheroName: Ada\nheroTitle: \"Analyst & Metaphysician\"\nheroButtonText: Read the notes\nheroButtonUrl: /notes\n---\n",
        )
        .with_doc(
            "about.md",
            "---\naboutText |\n  I wrote the **first** program.\n\n  It ran on an *engine*.\n---\n\n# About\n",
        )
        .with_doc(
            "settings.md",
            "---\nsiteTitle: Ada Notes\ncolorScheme: dark\nmetaDescription: Notes on the Analytical Engine\n---\n",
        )
}
