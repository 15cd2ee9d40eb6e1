use super::{load_index, to_json};
use crate::retrieval::get_fusionkit_overview;
use crate::state::DocState;
use rmcp::schemars;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct OverviewRequest {
    /// Part of the overview to return: "introduction", "keyBenefits",
    /// "quickStart", "deploymentScenarios" or "all" (default)
    pub section: Option<String>,
}

pub async fn handle_overview(
    state: &Arc<DocState>,
    request: OverviewRequest,
) -> Result<String, String> {
    let docs = load_index(state).await?;
    let overview =
        get_fusionkit_overview(&docs, request.section.as_deref()).map_err(|e| e.to_string())?;
    to_json(&overview)
}
