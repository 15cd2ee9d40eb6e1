//! MCP tool adapters: request types, parameter validation and JSON responses.
//!
//! Every handler returns `Ok(json)` on success and the human-readable error
//! message on failure.

pub mod code_examples;
pub mod migration;
pub mod overview;
pub mod package_docs;
pub mod packages;
pub mod params;
pub mod scaffold;
pub mod search;

pub use code_examples::*;
pub use migration::*;
pub use overview::*;
pub use package_docs::*;
pub use packages::*;
pub use scaffold::*;
pub use search::*;

use crate::docs::IndexedDocs;
use crate::state::DocState;
use serde::Serialize;
use std::sync::Arc;

/// Index for the current call, with indexing failures rendered as a message.
pub(crate) async fn load_index(state: &DocState) -> Result<Arc<IndexedDocs>, String> {
    state.index().await.map_err(|e| {
        tracing::error!("Indexing {} failed: {:#}", state.docs_path().display(), e);
        format!("Failed to index documentation: {e:#}")
    })
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Failed to serialize response: {e}"))
}
