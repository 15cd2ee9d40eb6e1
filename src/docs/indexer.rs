//! Directory walking and categorized section indexing.

use super::category::Category;
use super::section::{DocSection, extract_sections};
use ignore::WalkBuilder;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Categorized collection of every section found under a documentation root.
///
/// The four category collections are disjoint; `all` holds every section in
/// discovery order (traversal order, then document order within a file).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexedDocs {
    pub overview: Vec<DocSection>,
    pub packages: Vec<DocSection>,
    pub migration: Vec<DocSection>,
    pub examples: Vec<DocSection>,
    pub all: Vec<DocSection>,
}

impl IndexedDocs {
    /// Sections filed under a category, in discovery order.
    pub fn category(&self, category: Category) -> &[DocSection] {
        match category {
            Category::Overview => &self.overview,
            Category::Packages => &self.packages,
            Category::Migration => &self.migration,
            Category::Examples => &self.examples,
        }
    }

    /// Appends a section to `all` and to its category.
    pub fn push(&mut self, category: Category, section: DocSection) {
        let bucket = match category {
            Category::Overview => &mut self.overview,
            Category::Packages => &mut self.packages,
            Category::Migration => &mut self.migration,
            Category::Examples => &mut self.examples,
        };
        bucket.push(section.clone());
        self.all.push(section);
    }

    /// Builds an index from already-parsed files, categorizing each by path.
    pub fn from_files<I>(files: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<DocSection>)>,
    {
        let mut indexed = Self::default();
        for (path, sections) in files {
            let category = Category::from_path(&path);
            for section in sections {
                indexed.push(category, section);
            }
        }
        indexed
    }

    /// Every section whose title, content or file path contains `query`,
    /// compared case-insensitively.
    pub fn find_content(&self, query: &str) -> Vec<&DocSection> {
        let query = query.to_lowercase();
        self.all
            .iter()
            .filter(|section| {
                section.title.to_lowercase().contains(&query)
                    || section.content.to_lowercase().contains(&query)
                    || section.file_path.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// Walks a documentation root and indexes every `.md` file below it.
#[derive(Debug, Clone)]
pub struct DocIndexer {
    root: PathBuf,
}

impl DocIndexer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Builds a fresh index of the documentation root.
    ///
    /// Unreadable directories and files are logged and skipped; this never
    /// fails, an inaccessible root simply produces an empty index.
    pub fn index_docs(&self) -> IndexedDocs {
        let mut indexed = IndexedDocs::default();

        for path in markdown_files(&self.root) {
            self.index_file(&path, &mut indexed);
        }

        tracing::info!(
            "Indexed {} sections from {} (overview: {}, packages: {}, migration: {}, examples: {})",
            indexed.all.len(),
            self.root.display(),
            indexed.overview.len(),
            indexed.packages.len(),
            indexed.migration.len(),
            indexed.examples.len()
        );

        indexed
    }

    /// Parses one markdown file and files its sections under the file's category.
    fn index_file(&self, path: &Path, indexed: &mut IndexedDocs) {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Could not process file {}: {}", path.display(), e);
                return;
            }
        };
        // Invalid UTF-8 is replaced rather than dropping the file
        let content = String::from_utf8_lossy(&bytes);

        let relative = relative_label(&self.root, path);
        let sections = extract_sections(&content, &relative);
        let category = Category::from_path(&relative);

        tracing::debug!(
            "Parsed {} sections from {} ({})",
            sections.len(),
            relative,
            category
        );

        for section in sections {
            indexed.push(category, section);
        }
    }
}

/// Lists `.md` files below `root`, depth first, with each directory's
/// entries in file name order.
///
/// Entries that cannot be read are logged and skipped.
pub(crate) fn markdown_files(root: &Path) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(true)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Could not process directory entry under {}: {}", root.display(), e);
                continue;
            }
        };

        let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
        let is_markdown = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == "md");

        if is_file && is_markdown {
            files.push(entry.into_path());
        }
    }
    files
}

/// Root-relative path joined with forward slashes.
pub(crate) fn relative_label(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
