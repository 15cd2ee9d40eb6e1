use super::params::require_string;
use super::{load_index, to_json};
use crate::retrieval::get_code_examples;
use crate::state::DocState;
use rmcp::schemars;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CodeExamplesRequest {
    /// Topic to find an example for, e.g. "authentication" or "getting started"
    #[schemars(with = "String")]
    pub use_case: Option<serde_json::Value>,
    /// Framework to prefer: "angular", "react", "vue" or "vanilla"
    pub framework: Option<String>,
}

pub async fn handle_code_examples(
    state: &Arc<DocState>,
    request: CodeExamplesRequest,
) -> Result<String, String> {
    let use_case =
        require_string("Use case", request.use_case.as_ref()).map_err(|e| e.to_string())?;
    let framework = request
        .framework
        .as_deref()
        .filter(|f| !f.trim().is_empty())
        .unwrap_or(state.config().default_framework.as_str());

    let docs = load_index(state).await?;
    let example = get_code_examples(&docs, use_case, Some(framework)).map_err(|e| e.to_string())?;
    to_json(&example)
}
