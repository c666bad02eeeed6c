//! Selector-driven HTML rewriting.
//!
//! A [`Plan`] is an ordered list of rules. Each rule pairs a CSS selector with
//! one or more [`Action`]s, and applies either to every matching element or
//! only to the first one in document order (the `querySelectorAll` /
//! `querySelector` distinction). A plan is applied in a single streaming pass
//! with `lol_html`, so untouched parts of the page come through byte for byte.
//!
//! # Example
//!
//! ```rust
//! use folio_page::rewrite::{Action, Plan};
//!
//! let mut plan = Plan::new();
//! plan.first(".title", [Action::text("New <title>")]);
//!
//! let html = r#"<h1 class="title">Old</h1><h1 class="title">Keep</h1>"#;
//! let out = plan.apply(html).unwrap();
//! assert_eq!(
//!     out,
//!     r#"<h1 class="title">New &lt;title&gt;</h1><h1 class="title">Keep</h1>"#
//! );
//! ```

use std::cell::Cell;

use folio_core::{Error, Result};
use lol_html::html_content::{ContentType, Element};
use lol_html::{HandlerResult, RewriteStrSettings, Selector, element, rewrite_str};

// ============================================================================
// Actions and rules
// ============================================================================

/// A single mutation of a matched element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Replace the element's children with escaped text.
    SetText(String),
    /// Replace the element's children with an HTML fragment.
    SetHtml(String),
    /// Set (or overwrite) an attribute.
    SetAttribute {
        /// Attribute name
        name: String,
        /// New attribute value
        value: String,
    },
    /// Insert an HTML fragment just before the element's end tag.
    AppendHtml(String),
    /// Insert an HTML fragment just after the element's start tag.
    PrependHtml(String),
}

impl Action {
    /// Shorthand for [`Action::SetText`].
    pub fn text(text: impl Into<String>) -> Self {
        Action::SetText(text.into())
    }

    /// Shorthand for [`Action::SetHtml`].
    pub fn html(html: impl Into<String>) -> Self {
        Action::SetHtml(html.into())
    }

    /// Shorthand for [`Action::SetAttribute`].
    pub fn attribute(name: impl Into<String>, value: impl Into<String>) -> Self {
        Action::SetAttribute {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Shorthand for [`Action::AppendHtml`].
    pub fn append_html(html: impl Into<String>) -> Self {
        Action::AppendHtml(html.into())
    }

    /// Shorthand for [`Action::PrependHtml`].
    pub fn prepend_html(html: impl Into<String>) -> Self {
        Action::PrependHtml(html.into())
    }

    fn apply(&self, el: &mut Element<'_, '_>) -> HandlerResult {
        match self {
            Action::SetText(text) => el.set_inner_content(text, ContentType::Text),
            Action::SetHtml(html) => el.set_inner_content(html, ContentType::Html),
            Action::SetAttribute { name, value } => el.set_attribute(name, value)?,
            Action::AppendHtml(html) => el.append(html, ContentType::Html),
            Action::PrependHtml(html) => el.prepend(html, ContentType::Html),
        }
        Ok(())
    }
}

/// Which matching elements a rule touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// Every match.
    All,
    /// Only the first match in document order.
    First,
}

/// A selector, its scope, and the actions to run on each match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    /// CSS selector
    pub selector: String,
    /// Which matches to touch
    pub scope: Scope,
    /// Actions, run in order
    pub actions: Vec<Action>,
}

// ============================================================================
// Plan
// ============================================================================

/// An ordered set of rewrite rules applied in one pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Plan {
    rules: Vec<Rule>,
}

impl Plan {
    /// Create an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule that touches every element matching `selector`.
    pub fn all(
        &mut self,
        selector: impl Into<String>,
        actions: impl IntoIterator<Item = Action>,
    ) -> &mut Self {
        self.push(selector, Scope::All, actions)
    }

    /// Add a rule that touches only the first element matching `selector`.
    pub fn first(
        &mut self,
        selector: impl Into<String>,
        actions: impl IntoIterator<Item = Action>,
    ) -> &mut Self {
        self.push(selector, Scope::First, actions)
    }

    fn push(
        &mut self,
        selector: impl Into<String>,
        scope: Scope,
        actions: impl IntoIterator<Item = Action>,
    ) -> &mut Self {
        self.rules.push(Rule {
            selector: selector.into(),
            scope,
            actions: actions.into_iter().collect(),
        });
        self
    }

    /// The rules added so far.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Check if the plan has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply the plan to `html`, returning the rewritten page.
    ///
    /// An empty plan returns the input unchanged without parsing it.
    pub fn apply(&self, html: &str) -> Result<String> {
        if self.rules.is_empty() {
            return Ok(html.to_string());
        }

        for rule in &self.rules {
            validate_selector(&rule.selector)?;
        }

        let matched: Vec<Cell<bool>> = self.rules.iter().map(|_| Cell::new(false)).collect();
        let handlers = self
            .rules
            .iter()
            .zip(&matched)
            .map(|(rule, seen)| {
                element!(rule.selector.as_str(), move |el| {
                    if rule.scope == Scope::First && seen.replace(true) {
                        return Ok(());
                    }
                    for action in &rule.actions {
                        action.apply(el)?;
                    }
                    Ok(())
                })
            })
            .collect();

        rewrite_str(
            html,
            RewriteStrSettings {
                element_content_handlers: handlers,
                ..RewriteStrSettings::default()
            },
        )
        .map_err(|e| Error::rewrite(e.to_string()))
    }
}

/// Check whether any element in `html` matches `selector`.
pub fn contains_element(html: &str, selector: &str) -> Result<bool> {
    validate_selector(selector)?;

    let found = Cell::new(false);
    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![element!(selector, |_el| {
                found.set(true);
                Ok(())
            })],
            ..RewriteStrSettings::default()
        },
    )
    .map_err(|e| Error::rewrite(e.to_string()))?;

    Ok(found.get())
}

fn validate_selector(selector: &str) -> Result<()> {
    selector
        .parse::<Selector>()
        .map(|_| ())
        .map_err(|e| Error::rewrite(format!("invalid selector '{selector}': {e}")))
}

// ============================================================================
// Tests
// ============================================================================
