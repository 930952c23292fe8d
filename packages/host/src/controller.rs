use crate::selection::{Overlay, Selection};
use artboard_dom::{Document, MoveDirection, Mutation};
use artboard_protocol::{HostMessage, PreviewMessage, Rect};
use serde_json::Value;
use tracing::debug;

/// State machine over `{doc, selected_id, rect}`.
///
/// Inbound render-surface messages go through [`HostController::handle`];
/// local edits go through [`HostController::apply`] and the convenience
/// wrappers around it. Both return the outbound [`HostMessage`]s the caller
/// must deliver, in order — mutate-then-notify is one step here, so no call
/// site can forget the notification half.
#[derive(Debug, Clone)]
pub struct HostController {
    doc: Document,
    selected_id: Option<String>,
    rect: Option<Rect>,
    revision: u64,
}

impl HostController {
    pub fn new(doc: Document) -> Self {
        Self {
            doc,
            selected_id: None,
            rect: None,
            revision: 0,
        }
    }

    /// Decode a raw wire value and handle it. Anything that does not decode
    /// as a [`PreviewMessage`] is dropped without a state change.
    pub fn handle_value(&mut self, value: &Value) -> Vec<HostMessage> {
        match PreviewMessage::decode(value) {
            Some(message) => self.handle(message),
            None => {
                debug!("ignoring unrecognized wire value");
                Vec::new()
            }
        }
    }

    /// One inbound message, processed to completion.
    pub fn handle(&mut self, message: PreviewMessage) -> Vec<HostMessage> {
        match message {
            PreviewMessage::Ready => vec![HostMessage::Hydrate {
                doc: self.doc.clone(),
            }],

            PreviewMessage::Clicked { id } => {
                self.selected_id = Some(id.clone());
                self.rect = None;
                vec![HostMessage::GetRect { id }]
            }

            PreviewMessage::Rect { id, rect } => {
                // Stale-reply guard: the id must match the selection at
                // arrival time, not at request time.
                if self.selected_id.as_deref() == Some(id.as_str()) {
                    self.rect = Some(rect);
                } else {
                    debug!(%id, "discarding stale rect reply");
                }
                Vec::new()
            }

            PreviewMessage::LayoutChanged => match &self.selected_id {
                Some(id) => vec![HostMessage::GetRect { id: id.clone() }],
                None => Vec::new(),
            },

            PreviewMessage::InlineEditCommit { id, text } => {
                self.apply(Mutation::SetText { node_id: id, text })
            }
        }
    }

    /// Apply a mutation and return the re-synchronization messages: a
    /// `hydrate` with the successor snapshot, plus a `getRect` for the
    /// current selection if one exists (the edit may have changed geometry).
    ///
    /// Re-hydration is unconditional — a mutation that missed its target
    /// still pushes a snapshot and bumps the revision.
    pub fn apply(&mut self, mutation: Mutation) -> Vec<HostMessage> {
        self.doc = mutation.apply(&self.doc);
        self.revision += 1;

        let mut out = vec![HostMessage::Hydrate {
            doc: self.doc.clone(),
        }];
        if let Some(id) = &self.selected_id {
            out.push(HostMessage::GetRect { id: id.clone() });
        }
        out
    }

    /// Style edit from the inspector, against the current selection. Does
    /// nothing with no selection.
    pub fn set_selected_style(
        &mut self,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Vec<HostMessage> {
        match &self.selected_id {
            Some(id) => {
                let mutation = Mutation::SetStyle {
                    node_id: id.clone(),
                    property: property.into(),
                    value: value.into(),
                };
                self.apply(mutation)
            }
            None => Vec::new(),
        }
    }

    /// Reorder the selected node within its siblings. The selection id is
    /// unchanged even though the sibling index moves.
    pub fn move_selected(&mut self, direction: MoveDirection) -> Vec<HostMessage> {
        match &self.selected_id {
            Some(id) => {
                let mutation = Mutation::MoveSibling {
                    node_id: id.clone(),
                    direction,
                };
                self.apply(mutation)
            }
            None => Vec::new(),
        }
    }

    /// Clear the selection; the cached rect describes the selected node, so
    /// it cannot outlive it.
    pub fn clear_selection(&mut self) {
        self.selected_id = None;
        self.rect = None;
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// Number of mutations applied so far, including no-op misses.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Read model for the inspector panel. `None` when nothing is selected
    /// or when the selection has gone stale (id no longer in the tree).
    pub fn selection(&self) -> Option<Selection<'_>> {
        let id = self.selected_id.as_deref()?;
        let (parent, index) = self.doc.find_parent_and_index(id)?;
        Some(Selection {
            doc: &self.doc,
            id,
            index,
            sibling_count: parent.children.len(),
        })
    }

    /// Placement of the visual selection overlay, if geometry is known.
    pub fn overlay(&self) -> Option<Overlay> {
        self.rect.map(Overlay::from)
    }
}
