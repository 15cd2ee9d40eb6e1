//! Code example lookup across every indexed section.

use super::{non_empty, require_non_empty};
use crate::docs::{DocSection, IndexedDocs, extract_code_blocks};
use crate::error::DocsError;
use serde::Serialize;

/// Framework assumed when the caller does not name one.
pub const DEFAULT_FRAMEWORK: &str = "react";

const NO_CODE: &str = "No code example available";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeExample {
    pub use_case: String,
    pub framework: String,
    pub code: String,
}

/// Finds the best code example for a use case.
///
/// Sections mentioning the use case that carry a fenced block are preferred
/// over those that don't; within that pool the first mentioning the
/// framework wins, else the first of the pool.
pub fn get_code_examples(
    docs: &IndexedDocs,
    use_case: &str,
    framework: Option<&str>,
) -> Result<CodeExample, DocsError> {
    let use_case = require_non_empty("Use case", use_case)?;
    let framework = non_empty(framework).unwrap_or(DEFAULT_FRAMEWORK);

    let candidates = docs.find_content(use_case);
    let (fenced, plain): (Vec<&DocSection>, Vec<&DocSection>) =
        candidates.into_iter().partition(|s| s.has_code_fence());
    let pool = if fenced.is_empty() { plain } else { fenced };

    let needle = framework.to_lowercase();
    let chosen = pool
        .iter()
        .find(|s| {
            s.title.to_lowercase().contains(&needle) || s.content.to_lowercase().contains(&needle)
        })
        .or_else(|| pool.first())
        .ok_or_else(|| DocsError::NoExamples(use_case.to_string()))?;

    tracing::debug!(
        "Code example for {:?} ({}) taken from {} ({})",
        use_case,
        framework,
        chosen.id,
        chosen.file_path
    );

    Ok(CodeExample {
        use_case: use_case.to_string(),
        framework: framework.to_string(),
        code: render_code(chosen),
    })
}

/// Fenced blocks joined by a blank line, else the raw content.
fn render_code(section: &DocSection) -> String {
    let blocks = extract_code_blocks(&section.content);
    if !blocks.is_empty() {
        return blocks.join("\n\n");
    }

    match section.content.trim() {
        "" => NO_CODE.to_string(),
        content => content.to_string(),
    }
}
