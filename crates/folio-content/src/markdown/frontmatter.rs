//! Frontmatter scanning for CMS-authored markdown files.
//!
//! Frontmatter is metadata at the start of a markdown file, delimited by `---`:
//!
//! ```markdown
//! ---
//! heroName: Ada Lovelace
//! heroTitle: "Analyst & Metaphysician"
//! aboutText: |
//!   I write **programs** for engines
//!   that do not exist yet.
//! ---
//!
//! Body text is ignored.
//! ```
//!
//! This is not a YAML parser. The scanner recognises flat `key: value` lines
//! and one level of `key: |` blocks whose lines are indented by two spaces.
//! Every value comes back as a string, and malformed input degrades to a
//! partial or empty [`Frontmatter`] instead of an error.
//!
//! # Usage
//!
//! ```rust
//! use folio_content::markdown::scan_frontmatter;
//!
//! let content = "---\ntitle: Test\nbio |\n  Line one\n  Line two\n---\n\nBody";
//! let fm = scan_frontmatter(content);
//!
//! assert_eq!(fm.get("title"), Some("Test"));
//! assert_eq!(fm.get("bio"), Some("Line one\nLine two"));
//! ```

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;

const DELIMITER: &str = "---";
const INDENT: &str = "  ";

// ============================================================================
// Frontmatter
// ============================================================================

/// Fields scanned from a frontmatter block.
///
/// Keys are unique (the last assignment wins) and values are always strings.
/// Serializes as a plain JSON/YAML map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Frontmatter {
    fields: BTreeMap<String, String>,
}

impl Frontmatter {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a field value, if the key was present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Get a field value, treating an empty string as absent.
    ///
    /// Page bindings use this so that a blank field never clears
    /// content that is already on the page.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Check if the key was present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Set a field, replacing any earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no fields were found.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Take ownership of the underlying map.
    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.fields
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Frontmatter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Frontmatter {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

// ============================================================================
// Scanning
// ============================================================================

/// Scan the frontmatter block at the top of `content`.
///
/// # Behavior
///
/// - No opening `---` line, or no closing `---` line: empty mapping
/// - Blank lines are skipped
/// - A line containing `|` opens a multiline field; following lines indented
///   by two spaces are joined with `\n` (indent removed, result trimmed)
/// - The first unindented line closes the block and is then read as a flat
///   field in its own right
/// - `key: value` lines split at the first colon; one pair of matching
///   surrounding quotes is removed from the value
/// - Anything else is ignored
///
/// Never fails and never panics.
///
/// # Example
///
/// ```rust
/// use folio_content::markdown::scan_frontmatter;
///
/// let fm = scan_frontmatter("---\nkey: \"quoted value\"\n---");
/// assert_eq!(fm.get("key"), Some("quoted value"));
///
/// let fm = scan_frontmatter("# Just Markdown");
/// assert!(fm.is_empty());
/// ```
pub fn scan_frontmatter(content: &str) -> Frontmatter {
    let Some(lines) = frontmatter_lines(content) else {
        return Frontmatter::new();
    };

    let mut scanner = Scanner::default();
    for line in lines {
        scanner.feed(line);
    }
    scanner.finish()
}

/// Lines between the opening and closing delimiters, or `None` when the
/// content has no complete frontmatter block.
fn frontmatter_lines(content: &str) -> Option<Vec<&str>> {
    let mut lines = content.lines();
    if !is_delimiter(lines.next()?) {
        return None;
    }

    let mut block = Vec::new();
    for line in lines {
        if is_delimiter(line) {
            return Some(block);
        }
        block.push(line);
    }

    log::debug!("Frontmatter opening delimiter found but no closing delimiter");
    None
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// A multiline field being collected.
struct Block {
    key: String,
    buffer: String,
}

impl Block {
    fn push(&mut self, line: &str) {
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(line);
    }
}

#[derive(Default)]
struct Scanner {
    fields: BTreeMap<String, String>,
    block: Option<Block>,
}

impl Scanner {
    fn feed(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }

        if let Some(block) = self.block.as_mut() {
            if let Some(rest) = line.strip_prefix(INDENT) {
                block.push(rest);
                return;
            }
            // An unindented line ends the block, then counts as a line of its own.
            self.close_block();
            self.flat_field(line);
            return;
        }

        if line.contains('|') {
            self.open_block(line);
        } else {
            self.flat_field(line);
        }
    }

    fn open_block(&mut self, line: &str) {
        self.block = Some(Block {
            key: block_key(line).to_string(),
            buffer: String::new(),
        });
    }

    fn close_block(&mut self) {
        if let Some(block) = self.block.take() {
            self.fields
                .insert(block.key, block.buffer.trim().to_string());
        }
    }

    fn flat_field(&mut self, line: &str) {
        if let Some((key, value)) = line.split_once(':') {
            self.fields
                .insert(key.trim().to_string(), strip_quotes(value.trim()).to_string());
        }
    }

    fn finish(mut self) -> Frontmatter {
        // A block still open at the closing delimiter is committed as-is.
        self.close_block();
        Frontmatter {
            fields: self.fields,
        }
    }
}

/// Key of a `key: |` (or `key |`) line.
fn block_key(line: &str) -> &str {
    let end = line
        .find(':')
        .or_else(|| line.find('|'))
        .unwrap_or(line.len());
    line[..end].trim()
}

/// Remove one pair of matching surrounding quotes.
fn strip_quotes(value: &str) -> &str {
    ['"', '\'']
        .into_iter()
        .find_map(|quote| value.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(value)
}

// ============================================================================
// Tests
// ============================================================================
