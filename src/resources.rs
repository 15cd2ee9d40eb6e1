//! Markdown files served as MCP resources.
//!
//! Every `.md` file under the documentation root is listed as
//! `file://docs/<relative path>` and read back as its full text. Only files
//! that appear in the listing can be read, so a URI cannot reach outside the
//! root.

use crate::docs::indexer::{markdown_files, relative_label};
use crate::error::DocsError;
use rmcp::model::{AnnotateAble, RawResource, ReadResourceResult, Resource, ResourceContents};
use std::path::{Path, PathBuf};

pub const URI_PREFIX: &str = "file://docs/";
pub const MIME_TYPE: &str = "text/markdown";

pub fn resource_uri(relative_path: &str) -> String {
    format!("{URI_PREFIX}{relative_path}")
}

/// One resource per markdown file, in discovery order.
pub fn list_doc_resources(root: &Path) -> Vec<Resource> {
    markdown_files(root)
        .iter()
        .map(|path| {
            let relative = relative_label(root, path);
            let file_name = path
                .file_name()
                .map_or_else(|| relative.clone(), |name| name.to_string_lossy().into_owned());

            RawResource::new(resource_uri(&relative), relative.clone())
                .with_title(format!("Document: {file_name}"))
                .with_description(format!("Markdown document from {relative}"))
                .with_mime_type(MIME_TYPE)
                .no_annotation()
        })
        .collect()
}

/// Full text of the markdown file behind `uri`.
pub fn read_doc_resource(root: &Path, uri: &str) -> Result<ReadResourceResult, DocsError> {
    let path = resolve(root, uri).ok_or_else(|| DocsError::ResourceNotFound(uri.to_string()))?;

    let bytes = std::fs::read(&path).map_err(|e| DocsError::ResourceUnreadable {
        uri: uri.to_string(),
        reason: e.to_string(),
    })?;
    let text = String::from_utf8_lossy(&bytes).into_owned();

    Ok(ReadResourceResult::new(vec![
        ResourceContents::text(text, uri).with_mime_type(MIME_TYPE),
    ]))
}

fn resolve(root: &Path, uri: &str) -> Option<PathBuf> {
    let relative = uri.strip_prefix(URI_PREFIX)?;
    markdown_files(root)
        .into_iter()
        .find(|path| relative_label(root, path) == relative)
}
