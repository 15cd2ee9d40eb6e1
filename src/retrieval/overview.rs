//! Framework overview assembled from the `overview` category.

use super::{content_or, non_empty, title_contains};
use crate::docs::{DocSection, IndexedDocs, extract_list_items};
use crate::error::DocsError;
use serde::Serialize;

const NO_INTRODUCTION: &str = "Introduction not found in documentation";
const NO_QUICK_START: &str = "Quick start guide not found in documentation";
const NO_KEY_BENEFITS: &str = "Key benefits not found in documentation";
const NO_SCENARIOS: &str = "Deployment scenarios not found in documentation";

/// Title fragments of the deployment scenario sections, in output order.
const SCENARIO_TITLES: [&str; 2] = ["standalone applications", "microfrontends in a shell"];

/// A named part of the overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverviewSection {
    Introduction,
    KeyBenefits,
    QuickStart,
    DeploymentScenarios,
}

impl OverviewSection {
    /// Parses a requested section name. `None` means the name is unknown.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "introduction" => Some(Self::Introduction),
            "keyBenefits" => Some(Self::KeyBenefits),
            "quickStart" => Some(Self::QuickStart),
            "deploymentScenarios" => Some(Self::DeploymentScenarios),
            _ => None,
        }
    }
}

/// Overview fields; only the requested ones are populated when a single
/// section is asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FusionKitOverview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_benefits: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_scenarios: Option<Vec<String>>,
}

/// Returns the overview, or a single part of it when `section` names one.
///
/// An absent, empty or `"all"` section returns every field.
pub fn get_fusionkit_overview(
    docs: &IndexedDocs,
    section: Option<&str>,
) -> Result<FusionKitOverview, DocsError> {
    let sections = &docs.overview;

    let requested = match non_empty(section) {
        None | Some("all") => None,
        Some(name) => Some(OverviewSection::from_name(name).ok_or_else(|| {
            DocsError::SectionNotFound {
                section: name.to_string(),
            }
        })?),
    };

    let Some(part) = requested else {
        return Ok(FusionKitOverview {
            introduction: Some(introduction(sections)),
            key_benefits: Some(key_benefits(sections)),
            quick_start: Some(quick_start(sections)),
            deployment_scenarios: Some(deployment_scenarios(sections)),
        });
    };

    let mut overview = FusionKitOverview::default();
    match part {
        OverviewSection::Introduction => overview.introduction = Some(introduction(sections)),
        OverviewSection::KeyBenefits => overview.key_benefits = Some(key_benefits(sections)),
        OverviewSection::QuickStart => overview.quick_start = Some(quick_start(sections)),
        OverviewSection::DeploymentScenarios => {
            overview.deployment_scenarios = Some(deployment_scenarios(sections))
        }
    }
    Ok(overview)
}

fn find_titled<'a>(sections: &'a [DocSection], needle: &str) -> Option<&'a DocSection> {
    sections.iter().find(|s| title_contains(s, needle))
}

fn introduction(sections: &[DocSection]) -> String {
    content_or(find_titled(sections, "what is fusionkit"), NO_INTRODUCTION)
}

fn quick_start(sections: &[DocSection]) -> String {
    content_or(find_titled(sections, "quick start"), NO_QUICK_START)
}

fn key_benefits(sections: &[DocSection]) -> Vec<String> {
    match find_titled(sections, "key benefits") {
        Some(section) => extract_list_items(&section.content),
        None => vec![NO_KEY_BENEFITS.to_string()],
    }
}

fn deployment_scenarios(sections: &[DocSection]) -> Vec<String> {
    let scenarios: Vec<String> = SCENARIO_TITLES
        .iter()
        .filter_map(|needle| find_titled(sections, needle))
        .map(|section| match section.first_line() {
            "" => section.title.clone(),
            line => format!("{}: {}", section.title, line),
        })
        .collect();

    if scenarios.is_empty() {
        vec![NO_SCENARIOS.to_string()]
    } else {
        scenarios
    }
}
