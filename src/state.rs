//! Shared server state: configuration and the optional index cache.
//!
//! Without the cache every call walks and parses the documentation tree, so
//! edits on disk are visible on the next call. With it, a call fingerprints
//! the tree (a metadata-only walk) and reuses the last index when nothing
//! changed.

use crate::config::Config;
use crate::docs::{CachedIndex, DocIndexer, IndexedDocs, compute_fingerprint};
use crate::error::Result;
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct DocState {
    config: Config,

    /// Last index built, when caching is enabled
    cache: RwLock<Option<CachedIndex>>,
}

impl std::fmt::Debug for DocState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocState")
            .field("docs_path", &self.config.docs_path)
            .field("cache_enabled", &self.config.cache)
            .finish()
    }
}

impl DocState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            cache: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn docs_path(&self) -> &Path {
        &self.config.docs_path
    }

    /// Returns an index of the documentation root, rebuilding it unless a
    /// cached index for an unchanged tree is available.
    pub async fn index(&self) -> Result<Arc<IndexedDocs>> {
        let root = self.config.docs_path.clone();

        if !self.config.cache {
            let docs = build_index(root).await?;
            return Ok(Arc::new(docs));
        }

        let fingerprint = {
            let root = root.clone();
            tokio::task::spawn_blocking(move || compute_fingerprint(&root))
                .await
                .context("fingerprint task failed")?
        };

        {
            let cache = self.cache.read().await;
            if let Some(entry) = cache.as_ref()
                && entry.is_fresh(&root, fingerprint)
            {
                tracing::debug!("Cache hit for {}", root.display());
                return Ok(entry.docs.clone());
            }
        }

        let docs = Arc::new(build_index(root.clone()).await?);
        *self.cache.write().await = Some(CachedIndex {
            root,
            fingerprint,
            docs: docs.clone(),
        });
        tracing::debug!("Cached index ({} sections, fingerprint {:016x})", docs.len(), fingerprint);

        Ok(docs)
    }
}

async fn build_index(root: std::path::PathBuf) -> Result<IndexedDocs> {
    tokio::task::spawn_blocking(move || DocIndexer::new(root).index_docs())
        .await
        .context("indexing task failed")
}
