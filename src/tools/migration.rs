use super::params::require_string;
use super::{load_index, to_json};
use crate::retrieval::get_migration_guide;
use crate::state::DocState;
use rmcp::schemars;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MigrationRequest {
    /// Version to migrate from, e.g. "v1" or "2.1.3"
    #[schemars(with = "String")]
    pub from_version: Option<serde_json::Value>,
    /// Version to migrate to (default: "latest")
    pub to_version: Option<String>,
}

pub async fn handle_migration(
    state: &Arc<DocState>,
    request: MigrationRequest,
) -> Result<String, String> {
    let from_version =
        require_string("From version", request.from_version.as_ref()).map_err(|e| e.to_string())?;

    let docs = load_index(state).await?;
    let guide = get_migration_guide(&docs, from_version, request.to_version.as_deref())
        .map_err(|e| e.to_string())?;
    to_json(&guide)
}
