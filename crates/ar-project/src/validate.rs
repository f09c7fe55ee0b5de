//! Document validation logic.

use std::collections::HashSet;

use ar_core::{CoreError, ensure_finite};

use crate::schema::{GraphDocument, GraphKind, LATEST_VERSION};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid weight on edge {edge}: {source}")]
    Weight {
        edge: String,
        #[source]
        source: CoreError,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_document(doc: &GraphDocument) -> Result<(), ValidationError> {
    if doc.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: doc.version,
        });
    }

    let mut vertex_ids = HashSet::new();
    for vertex in &doc.vertices {
        if vertex.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "vertices".to_string(),
                value: String::new(),
                reason: "vertex labels must not be empty".to_string(),
            });
        }
        if !vertex_ids.insert(vertex.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: vertex.clone(),
                context: "vertices".to_string(),
            });
        }
    }

    let mut edge_labels = HashSet::new();
    for edge in &doc.edges {
        if edge.label.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "edge label".to_string(),
                value: String::new(),
                reason: "edge labels must not be empty".to_string(),
            });
        }
        if !edge_labels.insert(edge.label.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: edge.label.clone(),
                context: "edges".to_string(),
            });
        }

        for (endpoint, context) in [(&edge.head, "head"), (&edge.tail, "tail")] {
            if !vertex_ids.contains(endpoint.as_str()) {
                return Err(ValidationError::MissingReference {
                    id: endpoint.clone(),
                    context: format!("{} of edge {}", context, edge.label),
                });
            }
        }

        match edge.weight {
            Some(w) => {
                ensure_finite(w, "edge weight").map_err(|source| ValidationError::Weight {
                    edge: edge.label.clone(),
                    source,
                })?;
            }
            None if doc.kind == GraphKind::SpanningTree => {
                return Err(ValidationError::InvalidValue {
                    field: format!("weight of {}", edge.label),
                    value: "none".to_string(),
                    reason: "spanning tree edges must carry a weight".to_string(),
                });
            }
            None => {}
        }
    }

    Ok(())
}
