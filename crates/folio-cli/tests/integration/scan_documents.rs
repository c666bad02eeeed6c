//! Integration tests for `folio scan` output.

use folio_cli::commands::scan_to_json;

use crate::common::full_site;

#[test]
fn test_scan_about_document() {
    let site = full_site();
    let json = scan_to_json(&[site.content_dir().join("about.md")], false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(
        value["aboutText"],
        "I wrote the **first** program.\nIt ran on an *engine*."
    );
}

#[test]
fn test_scan_strips_quotes() {
    let site = full_site();
    let json = scan_to_json(&[site.content_dir().join("hero.md")], false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["heroTitle"], "Analyst & Metaphysician");
    assert_eq!(value["heroButtonUrl"], "/notes");
}

#[test]
fn test_scan_every_section() {
    let site = full_site();
    let files: Vec<_> = ["personal.md", "hero.md", "about.md", "settings.md"]
        .iter()
        .map(|name| site.content_dir().join(name))
        .collect();

    let json = scan_to_json(&files, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 4);
    let settings = &value[files[3].display().to_string()];
    assert_eq!(settings["colorScheme"], "dark");
}
