//! Heuristic retrieval over an [`IndexedDocs`](crate::docs::IndexedDocs).
//!
//! There is no schema linking a package name or use case to a section; every
//! lookup is an ordered list of predicates evaluated top to bottom, and the
//! first section satisfying the earliest predicate wins. Sub-fields that find
//! nothing degrade to a fixed placeholder string instead of failing the call.

pub mod code_examples;
pub mod migration;
pub mod overview;
pub mod package_docs;
pub mod packages;

pub use code_examples::{CodeExample, DEFAULT_FRAMEWORK, get_code_examples};
pub use migration::{MigrationGuide, get_migration_guide};
pub use overview::{FusionKitOverview, OverviewSection, get_fusionkit_overview};
pub use package_docs::{PackageDocSection, PackageDocumentation, get_package_documentation};
pub use packages::{PackageCatalog, get_fusionkit_packages, package_key};

use crate::docs::DocSection;
use crate::error::DocsError;

/// A single matching criterion over sections.
pub(crate) type Rule<'r> = &'r dyn Fn(&DocSection) -> bool;

/// Returns the first section satisfying the earliest rule that matches anything.
///
/// Rules are tried in order; within a rule, sections are tried in order.
pub(crate) fn first_match<'a, I>(sections: I, rules: &[Rule<'_>]) -> Option<&'a DocSection>
where
    I: IntoIterator<Item = &'a DocSection>,
    I::IntoIter: Clone,
{
    let sections = sections.into_iter();
    rules
        .iter()
        .find_map(|rule| sections.clone().find(|section| rule(section)))
}

/// Case-insensitive substring test against a section title.
pub(crate) fn title_contains(section: &DocSection, needle: &str) -> bool {
    section.title.to_lowercase().contains(&needle.to_lowercase())
}

/// True when the title contains any of the (lowercase) needles.
pub(crate) fn title_contains_any(section: &DocSection, needles: &[&str]) -> bool {
    let title = section.title.to_lowercase();
    needles.iter().any(|needle| title.contains(needle))
}

/// Section content, or `placeholder` when there is no section or it is empty.
pub(crate) fn content_or(section: Option<&DocSection>, placeholder: &str) -> String {
    section
        .map(|s| s.content.as_str())
        .filter(|content| !content.is_empty())
        .unwrap_or(placeholder)
        .to_string()
}

/// Rejects empty or whitespace-only required parameters.
pub(crate) fn require_non_empty<'a>(
    param: &'static str,
    value: &'a str,
) -> Result<&'a str, DocsError> {
    if value.trim().is_empty() {
        return Err(DocsError::EmptyParameter { param });
    }
    Ok(value)
}

/// Treats an empty optional parameter as absent.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
