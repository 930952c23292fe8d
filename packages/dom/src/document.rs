use crate::mutation::MoveDirection;
use crate::node::Node;
use std::collections::HashMap;
use std::sync::Arc;

/// The document tree: one root node whose children are the editable blocks.
///
/// The root itself is not user-addressable — it carries no selectable id on
/// the wire and no mutation targets it. Mutations return a fresh `Document`
/// that shares every untouched subtree with its predecessor, so earlier
/// snapshots stay valid: cloning one is a refcount bump.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Document {
    pub root: Arc<Node>,
}

impl Document {
    pub fn new(root: Node) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    /// Depth-first search (document order) for the parent of the node with
    /// `id`, returning the parent and the node's index in its child list.
    ///
    /// Ids are unique by invariant; if that is ever violated the first match
    /// in document order wins — a defined answer rather than a crash.
    pub fn find_parent_and_index(&self, id: &str) -> Option<(&Node, usize)> {
        fn search<'a>(parent: &'a Node, id: &str) -> Option<(&'a Node, usize)> {
            for (index, child) in parent.children.iter().enumerate() {
                if child.id == id {
                    return Some((parent, index));
                }
                if let Some(found) = search(child, id) {
                    return Some(found);
                }
            }
            None
        }
        search(&self.root, id)
    }

    /// The node with `id`, searched over the whole tree in document order.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.find_parent_and_index(id)
            .map(|(parent, index)| parent.children[index].as_ref())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Ids of the root's direct children, in paint order.
    pub fn child_ids(&self) -> Vec<&str> {
        self.root
            .children
            .iter()
            .map(|child| child.id.as_str())
            .collect()
    }

    /// Merge `{property: value}` into the node's inline styles. An empty
    /// `value` removes the key entirely instead of storing an empty string —
    /// this is how the inspector clears a style by emptying its input.
    ///
    /// Scope: the root's direct children, the flat addressable set the
    /// render surface exposes. Unknown id → unchanged document.
    pub fn patch_style(&self, id: &str, property: &str, value: &str) -> Document {
        self.update_direct_child(id, |node| {
            if value.is_empty() {
                node.styles.inline.remove(property);
            } else {
                node.styles
                    .inline
                    .insert(property.to_string(), value.to_string());
            }
        })
    }

    /// Apply a whole style delta at once, one [`Document::patch_style`] rule
    /// per entry: empty values remove their key, the rest insert or replace.
    /// All keys absent from `delta` are preserved.
    pub fn merge_styles(&self, id: &str, delta: &HashMap<String, String>) -> Document {
        self.update_direct_child(id, |node| {
            for (property, value) in delta {
                if value.is_empty() {
                    node.styles.inline.remove(property);
                } else {
                    node.styles.inline.insert(property.clone(), value.clone());
                }
            }
        })
    }

    /// Replace the text payload of the matching direct child. The node's
    /// `type` tag is not consulted. Unknown id → unchanged document.
    pub fn set_text(&self, id: &str, text: &str) -> Document {
        self.update_direct_child(id, |node| {
            node.text = Some(text.to_string());
        })
    }

    /// Move the node one position up or down within its parent's child list.
    ///
    /// The node is located by a general tree search, so this works at any
    /// depth, but it never changes parents. A move past the first or last
    /// sibling is a no-op, as is an unknown id.
    pub fn move_sibling(&self, id: &str, direction: MoveDirection) -> Document {
        match move_within(&self.root, id, direction) {
            MoveOutcome::Moved(root) => Document {
                root: Arc::new(root),
            },
            MoveOutcome::AtBoundary | MoveOutcome::NotFound => self.clone(),
        }
    }

    /// Path-copy rewrite of one direct child; everything else is shared.
    fn update_direct_child(&self, id: &str, update: impl FnOnce(&mut Node)) -> Document {
        let Some(index) = self.root.children.iter().position(|child| child.id == id) else {
            return self.clone();
        };

        let mut child = (*self.root.children[index]).clone();
        update(&mut child);

        let mut root = (*self.root).clone();
        root.children[index] = Arc::new(child);
        Document {
            root: Arc::new(root),
        }
    }
}

enum MoveOutcome {
    /// Rewritten copy of the subtree the move happened inside.
    Moved(Node),
    AtBoundary,
    NotFound,
}

fn move_within(node: &Node, id: &str, direction: MoveDirection) -> MoveOutcome {
    for (index, child) in node.children.iter().enumerate() {
        if child.id == id {
            let target = match direction {
                MoveDirection::Up if index > 0 => index - 1,
                MoveDirection::Down if index + 1 < node.children.len() => index + 1,
                _ => return MoveOutcome::AtBoundary,
            };
            let mut copy = node.clone();
            let moved = copy.children.remove(index);
            copy.children.insert(target, moved);
            return MoveOutcome::Moved(copy);
        }
        match move_within(child, id, direction) {
            MoveOutcome::Moved(rewritten) => {
                let mut copy = node.clone();
                copy.children[index] = Arc::new(rewritten);
                return MoveOutcome::Moved(copy);
            }
            MoveOutcome::AtBoundary => return MoveOutcome::AtBoundary,
            MoveOutcome::NotFound => {}
        }
    }
    MoveOutcome::NotFound
}
