//! Path-based content categories.

use serde::Serialize;
use std::fmt;

/// Bucket a documentation file's sections are filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Overview,
    Packages,
    Migration,
    Examples,
}

impl Category {
    pub const ALL: [Self; 4] = [
        Self::Overview,
        Self::Packages,
        Self::Migration,
        Self::Examples,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Packages => "packages",
            Self::Migration => "migration",
            Self::Examples => "examples",
        }
    }

    /// Categorizes a path relative to the documentation root.
    ///
    /// First match wins: overview, packages, migration, then examples as the
    /// catch-all for tutorials and guides.
    pub fn from_path(relative_path: &str) -> Self {
        let normalized = normalize_path(relative_path);

        if normalized.contains("overview") || normalized == "index.md" {
            Self::Overview
        } else if normalized.contains("package") {
            Self::Packages
        } else if normalized.contains("migration") {
            Self::Migration
        } else {
            Self::Examples
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercase, forward-slash form used for every path comparison.
pub fn normalize_path(path: &str) -> String {
    path.to_lowercase().replace('\\', "/")
}
