//! Free-text lookup across every indexed section.

use super::params::require_string;
use super::{load_index, to_json};
use crate::docs::{Category, DocSection};
use crate::state::DocState;
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Text to look for in section titles, content and file paths
    #[schemars(with = "String")]
    pub query: Option<serde_json::Value>,
    /// Maximum number of results to return (default: 10)
    #[serde(default = "default_limit")]
    pub limit: Option<usize>,
}

fn default_limit() -> Option<usize> {
    Some(10)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub file_path: &'a str,
    pub category: Category,
    pub level: u8,
    pub content: &'a str,
}

impl<'a> From<&'a DocSection> for SearchHit<'a> {
    fn from(section: &'a DocSection) -> Self {
        Self {
            id: &section.id,
            title: &section.title,
            file_path: &section.file_path,
            category: Category::from_path(&section.file_path),
            level: section.level,
            content: &section.content,
        }
    }
}

#[derive(Debug, Serialize)]
struct SearchResponse<'a> {
    query: &'a str,
    /// Matches before truncation to `limit`
    total: usize,
    results: Vec<SearchHit<'a>>,
}

pub async fn handle_search(
    state: &Arc<DocState>,
    request: SearchRequest,
) -> Result<String, String> {
    let query = require_string("Query", request.query.as_ref()).map_err(|e| e.to_string())?;
    let limit = request.limit.unwrap_or(10);

    let docs = load_index(state).await?;
    let matches = docs.find_content(query);
    tracing::debug!("Search {:?} matched {} sections", query, matches.len());

    let response = SearchResponse {
        query,
        total: matches.len(),
        results: matches.into_iter().take(limit).map(SearchHit::from).collect(),
    };
    to_json(&response)
}
