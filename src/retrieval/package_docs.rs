//! Per-package documentation from files whose path names the package.

use super::{Rule, content_or, first_match, non_empty, require_non_empty, title_contains, title_contains_any};
use crate::docs::{DocSection, IndexedDocs};
use crate::error::DocsError;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

const NO_OVERVIEW: &str = "Overview not found in documentation";
const NO_INSTALLATION: &str = "Installation instructions not found in documentation";
const NO_API: &str = "API documentation not found";
const NO_EXAMPLES: &str = "Examples not found in documentation";

/// Sections longer than this are considered substantial enough to serve as
/// an overview when nothing better matches.
const OVERVIEW_MIN_CONTENT: usize = 100;

/// First install command in any package manager flavor.
static INSTALL_COMMAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:npm|yarn|pnpm)[ \t]+(?:install|add|i)[ \t]+[^\n`]+")
        .expect("install pattern is valid")
});

/// A named part of a package's documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageDocSection {
    Overview,
    Installation,
    Api,
    Examples,
}

impl PackageDocSection {
    /// Parses a requested section name. `None` means the name is unknown.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "overview" => Some(Self::Overview),
            "installation" => Some(Self::Installation),
            "api" => Some(Self::Api),
            "examples" => Some(Self::Examples),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackageDocumentation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<String>,
}

/// Collects documentation for the package whose name appears in the file
/// paths of `packages` sections.
///
/// A package with no matching files fails before the section name is checked.
pub fn get_package_documentation(
    docs: &IndexedDocs,
    package_name: &str,
    section: Option<&str>,
) -> Result<PackageDocumentation, DocsError> {
    let package_name = require_non_empty("Package name", package_name)?;

    let needle = package_name.to_lowercase();
    let sections: Vec<&DocSection> = docs
        .packages
        .iter()
        .filter(|s| s.file_path.to_lowercase().contains(&needle))
        .collect();

    if sections.is_empty() {
        return Err(DocsError::DocumentationNotFound(package_name.to_string()));
    }

    let requested = match non_empty(section) {
        None | Some("all") => None,
        Some(name) => Some(PackageDocSection::from_name(name).ok_or_else(|| {
            DocsError::PackageSectionNotFound {
                section: name.to_string(),
                package: package_name.to_string(),
            }
        })?),
    };

    let Some(part) = requested else {
        return Ok(PackageDocumentation {
            overview: Some(overview(&sections)),
            installation: Some(installation(&sections)),
            api: Some(api(&sections)),
            examples: Some(examples(&sections)),
        });
    };

    let mut documentation = PackageDocumentation::default();
    match part {
        PackageDocSection::Overview => documentation.overview = Some(overview(&sections)),
        PackageDocSection::Installation => {
            documentation.installation = Some(installation(&sections))
        }
        PackageDocSection::Api => documentation.api = Some(api(&sections)),
        PackageDocSection::Examples => documentation.examples = Some(examples(&sections)),
    }
    Ok(documentation)
}

fn overview(sections: &[&DocSection]) -> String {
    let purpose = |s: &DocSection| title_contains(s, "purpose");
    let top_level = |s: &DocSection| s.level == 1;
    let substantial = |s: &DocSection| s.content.chars().count() > OVERVIEW_MIN_CONTENT;
    let rules: [Rule<'_>; 3] = [&purpose, &top_level, &substantial];

    content_or(first_match(sections.iter().copied(), &rules), NO_OVERVIEW)
}

fn installation(sections: &[&DocSection]) -> String {
    sections
        .iter()
        .find_map(|s| INSTALL_COMMAND.find(&s.content))
        .map_or_else(|| NO_INSTALLATION.to_string(), |m| m.as_str().trim().to_string())
}

fn api(sections: &[&DocSection]) -> String {
    let api_like = |s: &DocSection| title_contains_any(s, &["api", "interface", "features", "commands"]);

    content_or(first_match(sections.iter().copied(), &[&api_like]), NO_API)
}

fn examples(sections: &[&DocSection]) -> String {
    let titled = |s: &DocSection| title_contains_any(s, &["example", "usage"]);
    let has_code = |s: &DocSection| s.has_code_fence();
    let rules: [Rule<'_>; 2] = [&titled, &has_code];

    content_or(first_match(sections.iter().copied(), &rules), NO_EXAMPLES)
}
