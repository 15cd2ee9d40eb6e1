use clap::Parser;
use fusionkit_docs_mcp::cli::{Cli, Commands, ScaffoldCommand};
use fusionkit_docs_mcp::server::DocsServer;
use fusionkit_docs_mcp::state::DocState;
use fusionkit_docs_mcp::tools::{
    CodeExamplesRequest, CopilotRequest, MfeRequest, MigrationRequest, OverviewRequest,
    PackageDocsRequest, PackagesRequest, SearchRequest, ShellRequest, handle_code_examples,
    handle_create_copilot, handle_create_mfe, handle_create_shell, handle_migration,
    handle_overview, handle_package_docs, handle_packages, handle_search,
};
use rmcp::{ServiceExt, transport::stdio};
use serde_json::Value;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    fusionkit_docs_mcp::tracing::init(cli.log_format);

    let config = cli.resolve_config()?;

    let Some(command) = cli.command.filter(|c| !matches!(c, Commands::Serve)) else {
        return serve(DocsServer::new(config)).await;
    };

    let state = Arc::new(DocState::new(config));
    match run_once(&state, command).await {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    }
}

async fn serve(server: DocsServer) -> anyhow::Result<()> {
    tracing::info!(
        "Starting fusionkit-docs-mcp MCP server (docs: {})",
        server.doc_state().docs_path().display()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    service.waiting().await?;

    Ok(())
}

/// Runs a single tool from the command line.
async fn run_once(state: &Arc<DocState>, command: Commands) -> Result<String, String> {
    match command {
        Commands::Serve => unreachable!("serve is handled before dispatch"),
        Commands::Overview { section } => handle_overview(state, OverviewRequest { section }).await,
        Commands::Packages { package_name } => {
            handle_packages(state, PackagesRequest { package_name }).await
        }
        Commands::PackageDocs {
            package_name,
            section,
        } => {
            let request = PackageDocsRequest {
                package_name: Some(Value::String(package_name)),
                section,
            };
            handle_package_docs(state, request).await
        }
        Commands::Examples {
            use_case,
            framework,
        } => {
            let request = CodeExamplesRequest {
                use_case: Some(Value::String(use_case)),
                framework,
            };
            handle_code_examples(state, request).await
        }
        Commands::Migration {
            from_version,
            to_version,
        } => {
            let request = MigrationRequest {
                from_version: Some(Value::String(from_version)),
                to_version,
            };
            handle_migration(state, request).await
        }
        Commands::Search { query, limit } => {
            let request = SearchRequest {
                query: Some(Value::String(query)),
                limit: Some(limit),
            };
            handle_search(state, request).await
        }
        Commands::Scaffold { project } => match project {
            ScaffoldCommand::Shell { name } => handle_create_shell(state, ShellRequest { name }).await,
            ScaffoldCommand::Mfe { name, framework } => {
                handle_create_mfe(state, MfeRequest { name, framework }).await
            }
            ScaffoldCommand::Copilot { name } => {
                handle_create_copilot(state, CopilotRequest { name }).await
            }
        },
    }
}
