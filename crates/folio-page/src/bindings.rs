//! Section bindings: which frontmatter fields land where on the page.
//!
//! Every binding takes the page and a [`Frontmatter`] as plain arguments and
//! returns the rewritten page. A field that is missing or empty skips its
//! update entirely; a section with no usable fields returns the page
//! unchanged.
//!
//! | Section    | Field             | Target                                          |
//! |------------|-------------------|-------------------------------------------------|
//! | personal   | `fullName`        | text of all `.hero-name`, `.profile-name`       |
//! | personal   | `email`           | all `a[href^="mailto:"]`: href and text         |
//! | personal   | `profileImage`    | `src` of all `.profile-image`, `.hero-image`    |
//! | hero       | `heroName`        | text of first `.hero-name`                      |
//! | hero       | `heroTitle`       | text of first `.hero-title`                     |
//! | hero       | `heroTagline`     | text of first `.hero-tagline`                   |
//! | hero       | `heroSubtitle`    | text of first `.hero-subtitle`                  |
//! | hero       | `heroButtonText` + `heroButtonUrl` | first `.hero-button`: text and href |
//! | about      | `aboutText`       | inner HTML of first `.about-text`               |
//! | settings   | `siteTitle`       | `<head>` `<title>`, text of all `.site-title`   |
//! | settings   | `colorScheme`     | `data-theme` on `<html>`                        |
//! | settings   | `metaDescription` | `content` of first `meta[name="description"]`   |

use folio_content::{Frontmatter, escape_html, markdown_to_html};
use folio_core::Result;

use crate::rewrite::{Action, Plan, contains_element};

const DOCUMENT_TITLE: &str = "head > title";
const META_DESCRIPTION: &str = r#"meta[name="description"]"#;

/// Bind the personal section: name, email links, and profile images.
pub fn apply_personal(html: &str, fm: &Frontmatter) -> Result<String> {
    let mut plan = Plan::new();

    if let Some(name) = fm.get_non_empty("fullName") {
        plan.all(".hero-name", [Action::text(name)])
            .all(".profile-name", [Action::text(name)]);
    }

    if let Some(email) = fm.get_non_empty("email") {
        plan.all(
            r#"a[href^="mailto:"]"#,
            [
                Action::attribute("href", format!("mailto:{email}")),
                Action::text(email),
            ],
        );
    }

    if let Some(image) = fm.get_non_empty("profileImage") {
        plan.all(".profile-image", [Action::attribute("src", image)])
            .all(".hero-image", [Action::attribute("src", image)]);
    }

    log::debug!("personal: {} rule(s)", plan.rules().len());
    plan.apply(html)
}

/// Bind the hero section.
///
/// The button is only touched when both its text and URL are present.
pub fn apply_hero(html: &str, fm: &Frontmatter) -> Result<String> {
    let mut plan = Plan::new();

    for (field, selector) in [
        ("heroName", ".hero-name"),
        ("heroTitle", ".hero-title"),
        ("heroTagline", ".hero-tagline"),
        ("heroSubtitle", ".hero-subtitle"),
    ] {
        if let Some(value) = fm.get_non_empty(field) {
            plan.first(selector, [Action::text(value)]);
        }
    }

    if let (Some(text), Some(url)) = (
        fm.get_non_empty("heroButtonText"),
        fm.get_non_empty("heroButtonUrl"),
    ) {
        plan.first(
            ".hero-button",
            [Action::text(text), Action::attribute("href", url)],
        );
    }

    log::debug!("hero: {} rule(s)", plan.rules().len());
    plan.apply(html)
}

/// Bind the about section, rendering its inline markdown to HTML.
pub fn apply_about(html: &str, fm: &Frontmatter) -> Result<String> {
    let mut plan = Plan::new();

    if let Some(text) = fm.get_non_empty("aboutText") {
        plan.first(".about-text", [Action::html(markdown_to_html(text))]);
    }

    log::debug!("about: {} rule(s)", plan.rules().len());
    plan.apply(html)
}

/// Bind the settings section: document title, theme, and meta description.
///
/// A missing document `<title>` or description `<meta>` is created at the end
/// of `<head>`. A page without `<head>` gets one as the first child of
/// `<html>`; a fragment with neither keeps only its in-body updates.
pub fn apply_settings(html: &str, fm: &Frontmatter) -> Result<String> {
    let mut plan = Plan::new();
    let mut head_additions = String::new();

    if let Some(title) = fm.get_non_empty("siteTitle") {
        if contains_element(html, DOCUMENT_TITLE)? {
            plan.first(DOCUMENT_TITLE, [Action::text(title)]);
        } else {
            head_additions.push_str(&format!("<title>{}</title>", escape_html(title)));
        }
        plan.all(".site-title", [Action::text(title)]);
    }

    if let Some(scheme) = fm.get_non_empty("colorScheme") {
        plan.first("html", [Action::attribute("data-theme", scheme)]);
    }

    if let Some(description) = fm.get_non_empty("metaDescription") {
        if contains_element(html, META_DESCRIPTION)? {
            plan.first(META_DESCRIPTION, [Action::attribute("content", description)]);
        } else {
            head_additions.push_str(&format!(
                r#"<meta name="description" content="{}">"#,
                escape_html(description)
            ));
        }
    }

    if !head_additions.is_empty() {
        add_to_head(&mut plan, html, head_additions)?;
    }

    log::debug!("settings: {} rule(s)", plan.rules().len());
    plan.apply(html)
}

fn add_to_head(plan: &mut Plan, html: &str, fragment: String) -> Result<()> {
    if contains_element(html, "head")? {
        plan.first("head", [Action::append_html(fragment)]);
    } else if contains_element(html, "html")? {
        log::debug!("Page has no <head>, creating one");
        plan.first("html", [Action::prepend_html(format!("<head>{fragment}</head>"))]);
    } else {
        log::debug!("Page has no <head> or <html>, dropping {fragment}");
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
