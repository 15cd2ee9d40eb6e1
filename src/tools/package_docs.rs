use super::params::require_string;
use super::{load_index, to_json};
use crate::retrieval::get_package_documentation;
use crate::state::DocState;
use rmcp::schemars;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PackageDocsRequest {
    /// Package whose documentation to return; matched against doc file paths
    #[schemars(with = "String")]
    pub package_name: Option<serde_json::Value>,
    /// "overview", "installation", "api", "examples" or "all" (default)
    pub section: Option<String>,
}

pub async fn handle_package_docs(
    state: &Arc<DocState>,
    request: PackageDocsRequest,
) -> Result<String, String> {
    // Parameter errors are reported before any indexing work
    let package_name =
        require_string("Package name", request.package_name.as_ref()).map_err(|e| e.to_string())?;

    let docs = load_index(state).await?;
    let documentation =
        get_package_documentation(&docs, package_name, request.section.as_deref())
            .map_err(|e| e.to_string())?;
    to_json(&documentation)
}
