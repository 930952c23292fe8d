use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Inline style overrides for one node.
///
/// Property names and values are opaque strings; nothing is validated here.
/// An absent key means "no override", so removing a key is how a style is
/// cleared (see [`crate::Document::patch_style`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleSet {
    #[serde(default)]
    pub inline: HashMap<String, String>,
}

impl StyleSet {
    pub fn is_empty(&self) -> bool {
        self.inline.is_empty()
    }
}

/// A single node of the document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique within the document, stable across mutations, assigned at
    /// creation and never regenerated here.
    pub id: String,

    /// Rendering kind tag (e.g. `"text"`). Serialized as `type`; the model
    /// treats it as data, not as a discriminant.
    #[serde(rename = "type")]
    pub kind: String,

    /// Text payload for text-bearing nodes. Replaced only by the
    /// inline-edit-commit path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "StyleSet::is_empty")]
    pub styles: StyleSet,

    /// Ordered children; insertion order is the paint order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Arc<Node>>,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            text: None,
            styles: StyleSet::default(),
            children: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.inline.insert(property.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(Arc::new(child));
        self
    }

    /// Inline style override for `property`, if present.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.inline.get(property).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_assembles_node() {
        let node = Node::new("para-1", "text")
            .with_text("Hello")
            .with_style("color", "#374151");

        assert_eq!(node.id, "para-1");
        assert_eq!(node.kind, "text");
        assert_eq!(node.text.as_deref(), Some("Hello"));
        assert_eq!(node.style("color"), Some("#374151"));
        assert_eq!(node.style("fontSize"), None);
    }

    #[test]
    fn serializes_with_original_field_names() {
        let node = Node::new("title-1", "text")
            .with_text("Welcome")
            .with_style("fontSize", "28px");

        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["type"], "text");
        assert_eq!(value["styles"]["inline"]["fontSize"], "28px");
        // Leaf nodes ship without an empty children list.
        assert!(value.get("children").is_none());
    }

    #[test]
    fn deserializes_sparse_shape() {
        let node: Node = serde_json::from_value(serde_json::json!({
            "id": "box-1",
            "type": "box",
        }))
        .unwrap();

        assert_eq!(node.id, "box-1");
        assert!(node.text.is_none());
        assert!(node.styles.is_empty());
        assert!(node.children.is_empty());
    }
}
