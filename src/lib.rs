//! FusionKit documentation over the Model Context Protocol.
//!
//! A markdown documentation tree is parsed into heading-delimited sections,
//! filed into categories by path, and queried by a handful of heuristic
//! retrieval functions that the MCP tools expose.

pub mod cli;
pub mod config;
pub mod docs;
pub mod error;
pub mod resources;
pub mod retrieval;
pub mod scaffold;
pub mod server;
pub mod state;
pub mod tools;
pub mod tracing;

pub use config::Config;
pub use docs::{Category, DocIndexer, DocSection, IndexedDocs};
pub use error::{DocsError, ScaffoldError};
pub use server::DocsServer;
pub use state::DocState;
