use super::{load_index, to_json};
use crate::retrieval::get_fusionkit_packages;
use crate::state::DocState;
use rmcp::schemars;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PackagesRequest {
    /// Package to describe, e.g. "core", "cli", "keycloak". Omit to list all.
    pub package_name: Option<String>,
}

pub async fn handle_packages(
    state: &Arc<DocState>,
    request: PackagesRequest,
) -> Result<String, String> {
    let docs = load_index(state).await?;
    let packages = get_fusionkit_packages(&docs, request.package_name.as_deref())
        .map_err(|e| e.to_string())?;
    to_json(&packages)
}
