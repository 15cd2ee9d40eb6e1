//! Fingerprinting of a documentation tree for optional index reuse.
//!
//! A fingerprint covers the relative path, modification time and length of
//! every markdown file under the root. Editing, adding, removing or renaming
//! a file changes it, so a cached index is only reused while the tree on disk
//! is unchanged.

use super::indexer::{IndexedDocs, markdown_files, relative_label};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::UNIX_EPOCH;
use xxhash_rust::xxh3::Xxh3;

/// Computes the fingerprint of every markdown file below `root`.
///
/// Files whose metadata cannot be read still contribute their path, so a
/// permission change is noticed on the next successful read.
pub fn compute_fingerprint(root: &Path) -> u64 {
    let entries: Vec<(String, u128, u64)> = markdown_files(root)
        .into_iter()
        .map(|path| {
            let label = relative_label(root, &path);
            let (modified, len) = std::fs::metadata(&path)
                .map(|meta| {
                    let modified = meta
                        .modified()
                        .ok()
                        .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
                        .map_or(0, |d| d.as_nanos());
                    (modified, meta.len())
                })
                .unwrap_or((0, 0));
            (label, modified, len)
        })
        .collect();

    let mut hasher = Xxh3::new();
    hasher.update(root.as_os_str().as_encoded_bytes());
    for (label, modified, len) in &entries {
        hasher.update(label.as_bytes());
        hasher.update(&[0]);
        hasher.update(&modified.to_le_bytes());
        hasher.update(&len.to_le_bytes());
    }
    hasher.digest()
}

/// The last index built for a root, together with the tree fingerprint it was
/// built from.
#[derive(Debug, Clone)]
pub struct CachedIndex {
    pub root: PathBuf,
    pub fingerprint: u64,
    pub docs: Arc<IndexedDocs>,
}

impl CachedIndex {
    /// Whether this entry can serve a request for `root` with `fingerprint`.
    pub fn is_fresh(&self, root: &Path, fingerprint: u64) -> bool {
        self.root == root && self.fingerprint == fingerprint
    }
}
