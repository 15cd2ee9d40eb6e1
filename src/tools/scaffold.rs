use crate::scaffold::{Framework, ProjectKind, Scaffolder, failure_message, success_message};
use crate::state::DocState;
use rmcp::schemars;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ShellRequest {
    /// Name of the shell project to create (letters, numbers, hyphens, underscores)
    pub name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MfeRequest {
    /// Name of the microfrontend project to create (letters, numbers, hyphens, underscores)
    pub name: String,
    /// Framework for the microfrontend (default: react)
    #[serde(default)]
    pub framework: Framework,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CopilotRequest {
    /// Name of the copilot project to create (letters, numbers, hyphens, underscores)
    pub name: String,
}

pub async fn handle_create_shell(
    state: &Arc<DocState>,
    request: ShellRequest,
) -> Result<String, String> {
    create(state, ProjectKind::Shell, &request.name).await
}

pub async fn handle_create_mfe(
    state: &Arc<DocState>,
    request: MfeRequest,
) -> Result<String, String> {
    create(state, ProjectKind::Mfe(request.framework), &request.name).await
}

pub async fn handle_create_copilot(
    state: &Arc<DocState>,
    request: CopilotRequest,
) -> Result<String, String> {
    create(state, ProjectKind::Copilot, &request.name).await
}

async fn create(state: &DocState, kind: ProjectKind, name: &str) -> Result<String, String> {
    let working_dir = std::env::current_dir()
        .map_err(|e| format!("Failed to create {} project: {}", kind.label(), e))?;
    let config = state.config();

    let outcome = Scaffolder::new(&config.cli_binary, working_dir)
        .install_dependencies(config.install_dependencies)
        .create(kind, name)
        .await
        .map_err(|e| failure_message(kind, &e))?;

    tracing::info!("Created {} project at {}", kind.label(), outcome.path.display());
    Ok(success_message(&outcome))
}
