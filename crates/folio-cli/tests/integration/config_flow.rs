//! Integration tests for config file creation and loading.

use folio_cli::FolioConfig;
use folio_cli::config_handlers::cmd_config_init;

use crate::common::SiteFixture;

#[test]
fn test_init_then_load_round_trip() {
    let site = SiteFixture::new();
    let path = site.path("folio/config.toml");

    cmd_config_init(Some(path.to_str().unwrap()), false).unwrap();
    let config = FolioConfig::load(Some(path.to_str().unwrap())).unwrap();
    assert_eq!(config, FolioConfig::default());
}

#[test]
fn test_edited_config_is_read_back() {
    let site = SiteFixture::new();
    let path = site.path("config.toml");
    std::fs::write(
        &path,
        "[content]\nlocation = \"https://example.com/content\"\n\n[page]\noutput = \"dist/index.html\"\n",
    )
    .unwrap();

    let config = FolioConfig::load(Some(path.to_str().unwrap())).unwrap();
    assert_eq!(config.content.location, "https://example.com/content");
    assert_eq!(config.page.input, "index.html");

    assert_eq!(config.value_of("page.output").unwrap(), Some("dist/index.html"));
}
