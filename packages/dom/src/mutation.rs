use crate::document::Document;
use serde::{Deserialize, Serialize};

/// Direction of a sibling-local reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Semantic mutations of the document tree.
///
/// Each variant names an intent-preserving operation; applying one whose
/// target id is missing (or whose move hits a sibling-list boundary) returns
/// the document unchanged. That is the normal outcome of a race with a
/// concurrent removal, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mutation {
    /// Set one inline style property; an empty value removes the key.
    SetStyle {
        node_id: String,
        property: String,
        value: String,
    },

    /// Replace a node's text payload (atomic replacement, not a diff).
    SetText { node_id: String, text: String },

    /// Move a node one position within its parent's child list.
    MoveSibling {
        node_id: String,
        direction: MoveDirection,
    },
}

impl Mutation {
    /// Apply this mutation to a document snapshot, producing the successor
    /// snapshot. Total: never panics, never partially applies.
    pub fn apply(&self, doc: &Document) -> Document {
        match self {
            Mutation::SetStyle {
                node_id,
                property,
                value,
            } => doc.patch_style(node_id, property, value),
            Mutation::SetText { node_id, text } => doc.set_text(node_id, text),
            Mutation::MoveSibling { node_id, direction } => {
                doc.move_sibling(node_id, *direction)
            }
        }
    }
}
