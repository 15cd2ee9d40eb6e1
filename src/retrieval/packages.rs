//! Package catalog derived from top-level headings in the `packages` category.

use super::non_empty;
use crate::docs::{DocSection, IndexedDocs, slugify};
use crate::error::DocsError;
use serde::ser::{Serialize, Serializer};

const NO_DESCRIPTION: &str = "No description available";

/// Title prefixes that mark a heading as a package heading. Stripped in
/// order when deriving a key from the remaining title text.
const NAMESPACE_PREFIXES: [&str; 4] = ["@inform-appshell/", "fusion-kit", "fusion kit", "fusionkit"];

/// Known package keywords, checked in order; the first hit names the key.
const PACKAGE_KEYWORDS: [(&[&str], &str); 5] = [
    (&["cli"], "cli"),
    (&["module federation", "module-federation"], "module-federation"),
    (&["contracts"], "contracts"),
    (&["keycloak"], "keycloak"),
    (&["core"], "core"),
];

/// Canonical `fusion-kit-*` key for a package heading, or `None` when the
/// title does not look like a package.
pub fn package_key(title: &str) -> Option<String> {
    let lowered = title.to_lowercase();

    if let Some((_, keyword)) = PACKAGE_KEYWORDS
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| lowered.contains(n)))
    {
        return Some(format!("fusion-kit-{keyword}"));
    }

    if !NAMESPACE_PREFIXES.iter().any(|p| lowered.starts_with(p)) {
        return None;
    }

    let mut rest = lowered.as_str();
    for prefix in NAMESPACE_PREFIXES {
        rest = rest.strip_prefix(prefix).unwrap_or(rest);
    }
    let slug = slugify(rest.trim_matches(|c: char| c == '-' || c.is_whitespace()));
    // A bare namespace heading names the framework, not a package
    (!slug.is_empty()).then(|| format!("fusion-kit-{slug}"))
}

/// Package key to description, in the order the packages were discovered.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageCatalog {
    entries: Vec<(String, String)>,
}

impl PackageCatalog {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, description)| description.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds a package unless its key is already taken.
    fn insert_first(&mut self, key: String, description: &str) {
        if self.get(&key).is_none() {
            self.entries.push((key, description.to_string()));
        }
    }
}

impl Serialize for PackageCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
    }
}

/// Builds the package catalog: key to first-line description.
fn catalog(sections: &[DocSection]) -> PackageCatalog {
    let mut packages = PackageCatalog::default();
    for section in sections.iter().filter(|s| s.level == 1) {
        let Some(key) = package_key(&section.title) else {
            continue;
        };
        let description = match section.first_line() {
            "" => NO_DESCRIPTION,
            line => line,
        };
        packages.insert_first(key, description);
    }
    packages
}

/// Lists every documented package, or the single package named by
/// `package_name` (looked up as `fusion-kit-<name>`, then verbatim).
pub fn get_fusionkit_packages(
    docs: &IndexedDocs,
    package_name: Option<&str>,
) -> Result<PackageCatalog, DocsError> {
    let packages = catalog(&docs.packages);
    if packages.is_empty() {
        return Err(DocsError::NoPackageDocumentation);
    }

    let Some(name) = non_empty(package_name) else {
        return Ok(packages);
    };

    let description = packages
        .get(&format!("fusion-kit-{name}"))
        .or_else(|| packages.get(name))
        .ok_or_else(|| DocsError::PackageNotFound(name.to_string()))?;

    let mut single = PackageCatalog::default();
    single.insert_first(name.to_string(), description);
    Ok(single)
}
