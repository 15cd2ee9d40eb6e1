mod common;

use assert2::{check, let_assert};
use common::{TempDocs, empty_docs, fusionkit_docs};
use fusionkit_docs_mcp::tools::{
    CodeExamplesRequest, MigrationRequest, OverviewRequest, PackageDocsRequest, PackagesRequest,
    SearchRequest, handle_code_examples, handle_migration, handle_overview, handle_package_docs,
    handle_packages, handle_search,
};
use fusionkit_docs_mcp::{Config, DocState};
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;

fn parse(output: &str) -> Value {
    serde_json::from_str(output).unwrap_or_else(|e| panic!("invalid JSON ({e}): {output}"))
}

#[rstest]
#[tokio::test]
async fn overview_single_section_json(fusionkit_docs: (TempDocs, Arc<DocState>)) {
    let (_docs, state) = fusionkit_docs;
    let request = OverviewRequest {
        section: Some("keyBenefits".to_string()),
    };

    let output = handle_overview(&state, request).await.unwrap();
    check!(
        parse(&output)
            == json!({
                "keyBenefits": [
                    "Standardization across teams",
                    "Microfrontend Enablement",
                    "Reduced Development Time"
                ]
            })
    );
}

#[rstest]
#[tokio::test]
async fn packages_lookup_json(fusionkit_docs: (TempDocs, Arc<DocState>)) {
    let (_docs, state) = fusionkit_docs;
    let request = PackagesRequest {
        package_name: Some("core".to_string()),
    };

    let output = handle_packages(&state, request).await.unwrap();
    check!(
        parse(&output)
            == json!({ "core": "Core foundational services and utilities for FusionKit applications." })
    );
}

#[rstest]
#[tokio::test]
async fn packages_empty_tree(empty_docs: (TempDocs, Arc<DocState>)) {
    let (_docs, state) = empty_docs;

    let_assert!(Err(message) = handle_packages(&state, PackagesRequest::default()).await);
    check!(message == "No package documentation found");
}

#[rstest]
#[case(None, "Package name is required and must be a string, got: missing")]
#[case(Some(json!(42)), "Package name is required and must be a string, got: number")]
#[case(Some(json!(["core"])), "Package name is required and must be a string, got: array")]
#[case(Some(json!("")), "Package name is required and must be a non-empty string")]
#[tokio::test]
async fn package_docs_parameter_errors(
    fusionkit_docs: (TempDocs, Arc<DocState>),
    #[case] package_name: Option<Value>,
    #[case] expected: &str,
) {
    let (_docs, state) = fusionkit_docs;
    let request = PackageDocsRequest {
        package_name,
        section: None,
    };

    let_assert!(Err(message) = handle_package_docs(&state, request).await);
    check!(message == expected);
}

#[rstest]
#[tokio::test]
async fn package_docs_section_json(fusionkit_docs: (TempDocs, Arc<DocState>)) {
    let (_docs, state) = fusionkit_docs;
    let request = PackageDocsRequest {
        package_name: Some(json!("core")),
        section: Some("installation".to_string()),
    };

    let output = handle_package_docs(&state, request).await.unwrap();
    check!(parse(&output) == json!({ "installation": "npm install @inform-appshell/fusion-kit-core" }));
}

#[rstest]
#[tokio::test]
async fn package_docs_unknown_section(fusionkit_docs: (TempDocs, Arc<DocState>)) {
    let (_docs, state) = fusionkit_docs;
    let request = PackageDocsRequest {
        package_name: Some(json!("cli")),
        section: Some("changelog".to_string()),
    };

    let_assert!(Err(message) = handle_package_docs(&state, request).await);
    check!(message == "Section \"changelog\" not found for package \"cli\"");
}

#[rstest]
#[tokio::test]
async fn code_examples_json(fusionkit_docs: (TempDocs, Arc<DocState>)) {
    let (_docs, state) = fusionkit_docs;
    let request = CodeExamplesRequest {
        use_case: Some(json!("protected routes")),
        framework: Some("angular".to_string()),
    };

    let output = handle_code_examples(&state, request).await.unwrap();
    let value = parse(&output);
    check!(value["useCase"] == "protected routes");
    check!(value["framework"] == "angular");
    check!(
        value["code"] == "Call login() on the KeycloakService before rendering protected routes."
    );
}

#[tokio::test]
async fn code_examples_use_configured_default_framework() {
    let docs = TempDocs::fusionkit();
    let state = Arc::new(DocState::new(Config {
        docs_path: docs.path().to_path_buf(),
        default_framework: "vue".to_string(),
        ..Config::default()
    }));
    let request = CodeExamplesRequest {
        use_case: Some(json!("setup")),
        framework: None,
    };

    let output = handle_code_examples(&state, request).await.unwrap();
    check!(parse(&output)["framework"] == "vue");
}

#[rstest]
#[tokio::test]
async fn code_examples_missing_use_case(fusionkit_docs: (TempDocs, Arc<DocState>)) {
    let (_docs, state) = fusionkit_docs;

    let_assert!(Err(message) = handle_code_examples(&state, CodeExamplesRequest::default()).await);
    check!(message == "Use case is required and must be a string, got: missing");
}

#[rstest]
#[tokio::test]
async fn migration_json(fusionkit_docs: (TempDocs, Arc<DocState>)) {
    let (_docs, state) = fusionkit_docs;
    let request = MigrationRequest {
        from_version: Some(json!("v1")),
        to_version: None,
    };

    let output = handle_migration(&state, request).await.unwrap();
    let value = parse(&output);
    check!(value["title"] == "Migration from V1 to V2");
    check!(
        value["breakingChanges"]
            == json!([
                "ConfigService constructor now requires a configuration object",
                "Authentication service renamed from AuthService to KeycloakService"
            ])
    );
}

#[rstest]
#[tokio::test]
async fn migration_wrong_type(fusionkit_docs: (TempDocs, Arc<DocState>)) {
    let (_docs, state) = fusionkit_docs;
    let request = MigrationRequest {
        from_version: Some(json!(true)),
        to_version: None,
    };

    let_assert!(Err(message) = handle_migration(&state, request).await);
    check!(message == "From version is required and must be a string, got: boolean");
}

#[rstest]
#[tokio::test]
async fn search_limits_results(fusionkit_docs: (TempDocs, Arc<DocState>)) {
    let (_docs, state) = fusionkit_docs;
    let request = SearchRequest {
        query: Some(json!("fusionkit")),
        limit: Some(2),
    };

    let output = handle_search(&state, request).await.unwrap();
    let value = parse(&output);
    let_assert!(Some(results) = value["results"].as_array());
    check!(results.len() == 2);
    let_assert!(Some(total) = value["total"].as_u64());
    check!(total > 2);
    check!(results[0].get("filePath").is_some());
    check!(results[0].get("category").is_some());
}

#[rstest]
#[tokio::test]
async fn search_empty_query(fusionkit_docs: (TempDocs, Arc<DocState>)) {
    let (_docs, state) = fusionkit_docs;
    let request = SearchRequest {
        query: Some(json!("  ")),
        limit: None,
    };

    let_assert!(Err(message) = handle_search(&state, request).await);
    check!(message == "Query is required and must be a non-empty string");
}

#[test]
fn search_request_defaults_limit() {
    let request: SearchRequest = serde_json::from_value(json!({ "query": "cli" })).unwrap();
    check!(request.limit == Some(10));
}

#[test]
fn request_field_names_are_camel_case() {
    let request: PackageDocsRequest =
        serde_json::from_value(json!({ "packageName": "core", "section": "api" })).unwrap();
    check!(request.package_name == Some(json!("core")));
    check!(request.section.as_deref() == Some("api"));
}
