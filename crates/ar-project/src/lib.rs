//! ar-project: graph document format, validation and graph building.

pub mod build;
pub mod schema;
pub mod validate;

pub use build::{
    BuiltGraph, GraphSummary, LabeledDirectedGraph, LabeledUndirectedGraph, WeightedSpanningTree,
    build_graph,
};
pub use schema::*;
pub use validate::{ValidationError, validate_document};

use tracing::debug;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Graph error: {0}")]
    Graph(#[from] ar_graph::GraphError),

    #[error("Invalid value: {0}")]
    Core(#[from] ar_core::CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<GraphDocument> {
    let content = std::fs::read_to_string(path)?;
    let doc: GraphDocument = serde_yaml::from_str(&content)?;
    validate_document(&doc)?;
    debug!(path = %path.display(), name = %doc.name, "document loaded");
    Ok(doc)
}

pub fn save_yaml(path: &std::path::Path, doc: &GraphDocument) -> ProjectResult<()> {
    validate_document(doc)?;
    let content = serde_yaml::to_string(doc)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<GraphDocument> {
    let content = std::fs::read_to_string(path)?;
    let doc: GraphDocument = serde_json::from_str(&content)?;
    validate_document(&doc)?;
    debug!(path = %path.display(), name = %doc.name, "document loaded");
    Ok(doc)
}

pub fn save_json(path: &std::path::Path, doc: &GraphDocument) -> ProjectResult<()> {
    validate_document(doc)?;
    let content = serde_json::to_string_pretty(doc)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a document, picking the format from the file extension
/// (`.json` is JSON, anything else YAML).
pub fn load_document(path: &std::path::Path) -> ProjectResult<GraphDocument> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => load_json(path),
        _ => load_yaml(path),
    }
}
