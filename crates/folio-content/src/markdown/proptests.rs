//! Property-based tests for the frontmatter scanner.
