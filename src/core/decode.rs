use anyhow::Context;

use crate::models::DirectoryListing;

/// Parse a captured listing line back into typed entries.
///
/// Surrounding whitespace (the REPL's trailing newline) is ignored. Both the
/// device's spaced separators and compact JSON are accepted.
pub fn parse_listing(text: &str) -> anyhow::Result<DirectoryListing> {
    serde_json::from_str(text.trim()).context("failed to parse directory listing")
}
