//! Migration guide assembled from the `migration` category.

use super::{content_or, first_match, non_empty, require_non_empty, title_contains, title_contains_any};
use crate::docs::{DocSection, IndexedDocs, extract_list_items};
use crate::error::DocsError;
use serde::Serialize;

const NO_OVERVIEW: &str = "Migration overview not found in documentation";
const NO_BREAKING_CHANGES: &str = "Breaking changes not found in documentation";
const NO_STEPS: &str = "Migration steps not found in documentation";
const NO_CODE_CHANGES: &str = "Code changes not found in documentation";

/// Content longer than this qualifies a section as the migration overview.
const OVERVIEW_MIN_CONTENT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationGuide {
    pub title: String,
    pub overview: String,
    pub breaking_changes: Vec<String>,
    pub steps: Vec<String>,
    pub code_changes: String,
}

/// Builds a migration guide from `from_version`.
///
/// Each field is located independently and degrades to a placeholder. The
/// generated title is only used when no section title mentions the version
/// or the word "migration".
pub fn get_migration_guide(
    docs: &IndexedDocs,
    from_version: &str,
    to_version: Option<&str>,
) -> Result<MigrationGuide, DocsError> {
    let from_version = require_non_empty("From version", from_version)?;
    let to_version = non_empty(to_version).unwrap_or("latest");
    let sections = &docs.migration;

    let titled = |s: &DocSection| title_contains(s, from_version) || title_contains(s, "migration");
    let overview = |s: &DocSection| {
        title_contains(s, "overview") || s.content.chars().count() > OVERVIEW_MIN_CONTENT
    };
    let breaking = |s: &DocSection| title_contains_any(s, &["breaking", "changes"]);
    let steps = |s: &DocSection| title_contains_any(s, &["steps", "migration guide"]);
    let code = |s: &DocSection| {
        s.has_code_fence() || s.content.contains("Before:") || s.content.contains("After:")
    };

    let title = first_match(sections, &[&titled]).map_or_else(
        || format!("Migration from {from_version} to {to_version}"),
        |s| s.title.clone(),
    );

    Ok(MigrationGuide {
        title,
        overview: content_or(first_match(sections, &[&overview]), NO_OVERVIEW),
        breaking_changes: list_or(first_match(sections, &[&breaking]), NO_BREAKING_CHANGES),
        steps: list_or(first_match(sections, &[&steps]), NO_STEPS),
        code_changes: content_or(first_match(sections, &[&code]), NO_CODE_CHANGES),
    })
}

fn list_or(section: Option<&DocSection>, placeholder: &str) -> Vec<String> {
    match section {
        Some(section) => extract_list_items(&section.content),
        None => vec![placeholder.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::extract_sections;
    use assert2::{check, let_assert};
    use rstest::rstest;

    const V1_TO_V2: &str = "\
# Migration from V1 to V2
FusionKit V2 introduces breaking changes to service initialization and configuration.

## Breaking Changes
- **ConfigService** constructor now requires a configuration object
- Service registration moved to ServiceRegistry

## Migration Steps
1. Read everything first
- Update dependencies
- Run migration script
- Test application

## Code Changes
Before: new ConfigService()
After: new ConfigService(config)
";

    fn docs() -> IndexedDocs {
        IndexedDocs::from_files([(
            "migration/v1-to-v2.md".to_string(),
            extract_sections(V1_TO_V2, "migration/v1-to-v2.md"),
        )])
    }

    #[test]
    fn test_full_guide() {
        let guide = get_migration_guide(&docs(), "v1", Some("v2")).unwrap();

        check!(guide.title == "Migration from V1 to V2");
        check!(guide.overview.starts_with("FusionKit V2 introduces"));
        check!(
            guide.breaking_changes
                == [
                    "ConfigService constructor now requires a configuration object",
                    "Service registration moved to ServiceRegistry",
                ]
        );
        check!(
            guide.steps == ["Update dependencies", "Run migration script", "Test application"]
        );
        check!(guide.code_changes == "Before: new ConfigService()\nAfter: new ConfigService(config)");
    }

    #[test]
    fn test_serialized_field_names() {
        let guide = get_migration_guide(&docs(), "v1", None).unwrap();
        let json = serde_json::to_value(&guide).unwrap();

        for key in ["title", "overview", "breakingChanges", "steps", "codeChanges"] {
            check!(json.get(key).is_some(), "missing {key}");
        }
    }

    #[rstest]
    #[case(None, "Migration from v3 to latest")]
    #[case(Some(""), "Migration from v3 to latest")]
    #[case(Some("v4"), "Migration from v3 to v4")]
    fn test_generated_title(#[case] to_version: Option<&str>, #[case] expected: &str) {
        let docs = IndexedDocs::from_files([(
            "migration/notes.md".to_string(),
            extract_sections("# Upgrade Notes\nShort.", "migration/notes.md"),
        )]);

        let guide = get_migration_guide(&docs, "v3", to_version).unwrap();
        check!(guide.title == expected);
    }

    #[test]
    fn test_migration_title_shadows_generated_title() {
        let guide = get_migration_guide(&docs(), "v9", None).unwrap();
        check!(guide.title == "Migration from V1 to V2");
    }

    #[test]
    fn test_placeholders_when_category_is_empty() {
        let guide = get_migration_guide(&IndexedDocs::default(), "v1", None).unwrap();

        check!(guide.title == "Migration from v1 to latest");
        check!(guide.overview == NO_OVERVIEW);
        check!(guide.breaking_changes == [NO_BREAKING_CHANGES]);
        check!(guide.steps == [NO_STEPS]);
        check!(guide.code_changes == NO_CODE_CHANGES);
    }

    #[test]
    fn test_empty_from_version() {
        let_assert!(Err(err) = get_migration_guide(&docs(), "", None));
        check!(err.to_string() == "From version is required and must be a non-empty string");
    }
}
