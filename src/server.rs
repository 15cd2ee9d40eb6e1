//! MCP server exposing the documentation and scaffolding tools.

use crate::config::Config;
use crate::error::DocsError;
use crate::resources::{list_doc_resources, read_doc_resource};
use crate::state::DocState;
use crate::tools::{
    CodeExamplesRequest, CopilotRequest, MfeRequest, MigrationRequest, OverviewRequest,
    PackageDocsRequest, PackagesRequest, SearchRequest, ShellRequest, handle_code_examples,
    handle_create_copilot, handle_create_mfe, handle_create_shell, handle_migration,
    handle_overview, handle_package_docs, handle_packages, handle_search,
};
use rmcp::{
    ErrorData, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars::{self, JsonSchema, generate::SchemaSettings},
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP server for FusionKit documentation queries
#[derive(Clone)]
pub struct DocsServer {
    /// Shared state (configuration, index cache)
    state: Arc<DocState>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for DocsServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocsServer")
            .field("state", &self.state)
            .finish()
    }
}

#[tool_router]
impl DocsServer {
    pub fn new(config: Config) -> Self {
        Self {
            state: Arc::new(DocState::new(config)),
            tool_router: Self::tool_router(),
        }
    }

    pub fn doc_state(&self) -> &Arc<DocState> {
        &self.state
    }

    #[tool(
        name = "getFusionKitOverview",
        description = "Get an overview of FusionKit: introduction, key benefits, quick start and deployment scenarios. Optionally return a single section.",
        input_schema = inline_schema_for_type::<OverviewRequest>()
    )]
    async fn get_fusionkit_overview(
        &self,
        Parameters(request): Parameters<OverviewRequest>,
    ) -> std::result::Result<String, String> {
        handle_overview(&self.state, request).await
    }

    #[tool(
        name = "getFusionKitPackages",
        description = "List FusionKit packages (core, cli, contracts, keycloak, module-federation, ...) with short descriptions, or describe a single package.",
        input_schema = inline_schema_for_type::<PackagesRequest>()
    )]
    async fn get_fusionkit_packages(
        &self,
        Parameters(request): Parameters<PackagesRequest>,
    ) -> std::result::Result<String, String> {
        handle_packages(&self.state, request).await
    }

    #[tool(
        name = "getPackageDocumentation",
        description = "Get documentation for a FusionKit package: overview, installation, API and examples. Optionally return a single section.",
        input_schema = inline_schema_for_type::<PackageDocsRequest>()
    )]
    async fn get_package_documentation(
        &self,
        Parameters(request): Parameters<PackageDocsRequest>,
    ) -> std::result::Result<String, String> {
        handle_package_docs(&self.state, request).await
    }

    #[tool(
        name = "getCodeExamples",
        description = "Get a FusionKit code example for a use case (setup, authentication, configuration, ...), preferring the requested framework (default: react).",
        input_schema = inline_schema_for_type::<CodeExamplesRequest>()
    )]
    async fn get_code_examples(
        &self,
        Parameters(request): Parameters<CodeExamplesRequest>,
    ) -> std::result::Result<String, String> {
        handle_code_examples(&self.state, request).await
    }

    #[tool(
        name = "getMigrationGuide",
        description = "Get a FusionKit migration guide from a version: overview, breaking changes, steps and code changes.",
        input_schema = inline_schema_for_type::<MigrationRequest>()
    )]
    async fn get_migration_guide(
        &self,
        Parameters(request): Parameters<MigrationRequest>,
    ) -> std::result::Result<String, String> {
        handle_migration(&self.state, request).await
    }

    #[tool(
        name = "searchDocumentation",
        description = "Search all FusionKit documentation sections by title, content or file path (case-insensitive).",
        input_schema = inline_schema_for_type::<SearchRequest>()
    )]
    async fn search_documentation(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        handle_search(&self.state, request).await
    }

    #[tool(
        name = "createShell",
        description = "Create a FusionKit shell project with copilot integration by running \"fk create shell -n <name> --mcp\" in the server's working directory.",
        input_schema = inline_schema_for_type::<ShellRequest>()
    )]
    async fn create_shell(
        &self,
        Parameters(request): Parameters<ShellRequest>,
    ) -> std::result::Result<String, String> {
        handle_create_shell(&self.state, request).await
    }

    #[tool(
        name = "createMfe",
        description = "Create a FusionKit microfrontend project by running \"fk create mfe -n <name> --mcp -f <framework>\". Supports vue, angular and react (default).",
        input_schema = inline_schema_for_type::<MfeRequest>()
    )]
    async fn create_mfe(
        &self,
        Parameters(request): Parameters<MfeRequest>,
    ) -> std::result::Result<String, String> {
        handle_create_mfe(&self.state, request).await
    }

    #[tool(
        name = "createCopilot",
        description = "Create a FusionKit copilot (MCP server) project by running \"fk create copilot -n <name>\".",
        input_schema = inline_schema_for_type::<CopilotRequest>()
    )]
    async fn create_copilot(
        &self,
        Parameters(request): Parameters<CopilotRequest>,
    ) -> std::result::Result<String, String> {
        handle_create_copilot(&self.state, request).await
    }
}

#[tool_handler]
impl ServerHandler for DocsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(
            ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
        )
        .with_protocol_version(ProtocolVersion::V_2024_11_05)
        .with_server_info(Implementation::from_build_env())
        .with_instructions(
            "fusionkit-docs-mcp: FusionKit documentation served from a local markdown tree. \
             Use getFusionKitOverview and getFusionKitPackages to orient, \
             getPackageDocumentation, getCodeExamples and getMigrationGuide for specifics, \
             and searchDocumentation for anything else. \
             createShell, createMfe and createCopilot run the FusionKit CLI (fk). \
             Every markdown file is also available as a file://docs/ resource.",
        )
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, ErrorData> {
        let root = self.state.docs_path().to_path_buf();
        let resources = tokio::task::spawn_blocking(move || list_doc_resources(&root))
            .await
            .map_err(|e| ErrorData::internal_error(format!("Listing resources failed: {e}"), None))?;

        tracing::debug!("Listed {} documentation resources", resources.len());
        Ok(ListResourcesResult::with_all_items(resources))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, ErrorData> {
        let root = self.state.docs_path().to_path_buf();
        let uri = request.uri;

        tokio::task::spawn_blocking(move || read_doc_resource(&root, &uri))
            .await
            .map_err(|e| ErrorData::internal_error(format!("Reading resource failed: {e}"), None))?
            .map_err(|e| match &e {
                DocsError::ResourceNotFound(_) => ErrorData::resource_not_found(e.to_string(), None),
                _ => ErrorData::internal_error(e.to_string(), None),
            })
    }
}

/// Generate an inline JSON schema for MCP tools
///
/// Sets `inline_subschemas = true` so enums such as the MFE framework are
/// emitted inline instead of as `$ref`s, which MCP Inspector renders as
/// dropdowns.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    settings.inline_subschemas = true;

    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();
    let object = serde_json::to_value(schema).expect("failed to serialize schema");

    let json_object = match object {
        serde_json::Value::Object(object) => object,
        _ => panic!("Schema serialization produced non-object value"),
    };

    Arc::new(json_object)
}
