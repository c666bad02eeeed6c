//! Integration tests for loading a content directory and patching a page.

use folio_cli::FolioConfig;
use folio_cli::cli::RenderArgs;
use folio_cli::commands::{cmd_render, render_page};
use folio_loader::{FsSource, load_site_content};

use crate::common::{SiteFixture, TEMPLATE_PAGE, full_site};

#[tokio::test]
async fn test_full_site_binds_every_section() {
    let site = full_site();
    let out = render_page(TEMPLATE_PAGE, &FsSource::new(site.content_dir()))
        .await
        .expect("render should succeed");

    // personal
    assert!(out.contains(r#"<span class="profile-name">Ada Lovelace</span>"#));
    assert!(out.contains(r#"<a href="mailto:ada@example.com">ada@example.com</a>"#));
    assert!(out.contains(r#"<img class="profile-image" src="/img/ada.jpg">"#));
    assert!(out.contains(r#"<img class="hero-image" src="/img/ada.jpg">"#));

    // hero overrides the personal name on the first .hero-name
    assert!(out.contains(r#"<h1 class="hero-name">Ada</h1>"#));
    assert!(out.contains(r#"<p class="hero-title">Analyst &amp; Metaphysician</p>"#));
    assert!(out.contains(r#"<a class="hero-button" href="/notes">Read the notes</a>"#));
    assert!(out.contains(r#"<p class="hero-tagline">Your tagline</p>"#));

    // about
    assert!(out.contains(
        "<div class=\"about-text\"><p>I wrote the <strong>first</strong> program.<br>It ran on an <em>engine</em>.</p></div>"
    ));

    // settings
    assert!(out.contains("<title>Ada Notes</title>"));
    assert!(out.contains(r#"<span class="site-title">Ada Notes</span>"#));
    assert!(out.contains(r#"<html lang="en" data-theme="dark">"#));
    assert!(out.contains(r#"<meta name="description" content="Notes on the Analytical Engine">"#));
}

#[tokio::test]
async fn test_missing_documents_keep_template_defaults() {
    let site = SiteFixture::new().with_doc("hero.md", "---\nheroTagline: Poetical science\n---");
    let out = render_page(TEMPLATE_PAGE, &FsSource::new(site.content_dir()))
        .await
        .unwrap();

    assert!(out.contains(r#"<p class="hero-tagline">Poetical science</p>"#));
    assert!(out.contains(r#"<h1 class="hero-name">Your Name</h1>"#));
    assert!(out.contains("<title>Your Site</title>"));
    assert!(out.contains("<p>About you.</p>"));
}

#[tokio::test]
async fn test_documents_without_frontmatter_change_nothing() {
    let site = SiteFixture::new()
        .with_doc("personal.md", "# Ada\n\nfullName: not frontmatter\n")
        .with_doc("settings.md", "");

    let content = load_site_content(&FsSource::new(site.content_dir()))
        .await
        .unwrap();
    assert!(content.personal.as_ref().is_some_and(|fm| fm.is_empty()));

    let out = render_page(TEMPLATE_PAGE, &FsSource::new(site.content_dir()))
        .await
        .unwrap();
    assert_eq!(out, TEMPLATE_PAGE);
}

#[tokio::test]
async fn test_unreadable_section_keeps_the_others() {
    let site = SiteFixture::new()
        .with_doc("hero.md", "---\nheroName: Ada\n---")
        .with_doc("settings.md", "---\nsiteTitle: Ada Notes\n---");
    // A directory where a document should be fails to read.
    std::fs::create_dir(site.content_dir().join("about.md")).unwrap();

    let out = render_page(TEMPLATE_PAGE, &FsSource::new(site.content_dir()))
        .await
        .unwrap();
    assert!(out.contains(r#"<h1 class="hero-name">Ada</h1>"#));
    assert!(out.contains("<title>Ada Notes</title>"));
    assert!(out.contains("<p>About you.</p>"));
}

#[tokio::test]
async fn test_unreachable_content_server_keeps_page() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = folio_loader::source_for(&format!("http://{addr}/content"));
    let out = render_page(TEMPLATE_PAGE, source.as_ref()).await.unwrap();
    assert_eq!(out, TEMPLATE_PAGE);
}

#[tokio::test]
async fn test_cmd_render_uses_config_locations() {
    let site = full_site();
    let output = site.path("dist.html");

    let mut config = FolioConfig::default();
    config.content.location = site.content_dir().display().to_string();
    config.page.input = site.page().display().to_string();
    config.page.output = Some(output.display().to_string());

    cmd_render(&config, &RenderArgs::default()).await.unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains(r#"<h1 class="hero-name">Ada</h1>"#));
    assert_eq!(
        std::fs::read_to_string(site.page()).unwrap(),
        TEMPLATE_PAGE,
        "the template page itself is never modified"
    );
}
