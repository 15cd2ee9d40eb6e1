//! Markdown documentation indexing: section parsing, path categorization,
//! directory indexing and content extraction.

pub mod cache;
pub mod category;
pub mod extract;
pub mod indexer;
pub mod section;

pub use cache::{CachedIndex, compute_fingerprint};
pub use category::{Category, normalize_path};
pub use extract::{extract_code_blocks, extract_list_items};
pub use indexer::{DocIndexer, IndexedDocs};
pub use section::{DocSection, extract_sections, section_id, slugify};
