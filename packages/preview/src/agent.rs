use crate::layout::{self, PAGE_MARGIN};
use artboard_dom::Document;
use artboard_protocol::{HostMessage, PreviewMessage, Rect};
use serde_json::Value;
use tracing::debug;

/// One rendered block: a direct child of the document root with its computed
/// paint rect. Held in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderBlock {
    pub id: String,
    pub kind: String,
    pub text: Option<String>,
    pub rect: Rect,
}

/// The render surface agent.
///
/// Owns its render tree exclusively; state enters only through
/// [`PreviewAgent::handle`] (hydrate / geometry requests) and the
/// user-interaction surface (`click`, inline editing, viewport resize).
/// Every outbound fact is returned as [`PreviewMessage`]s for the caller to
/// deliver; the agent itself never touches host state.
#[derive(Debug)]
pub struct PreviewAgent {
    viewport_width: f64,
    blocks: Option<Vec<RenderBlock>>,
    doc: Option<Document>,
    editing: Option<String>,
}

impl PreviewAgent {
    pub fn new(viewport_width: f64) -> Self {
        Self {
            viewport_width,
            blocks: None,
            doc: None,
            editing: None,
        }
    }

    /// Bootstrapping is done; announce readiness for a snapshot.
    pub fn boot(&self) -> Vec<PreviewMessage> {
        vec![PreviewMessage::Ready]
    }

    /// Decode a raw wire value and handle it; undecodable values are
    /// dropped without a state change.
    pub fn handle_value(&mut self, value: &Value) -> Vec<PreviewMessage> {
        match HostMessage::decode(value) {
            Some(message) => self.handle(message),
            None => {
                debug!("ignoring unrecognized wire value");
                Vec::new()
            }
        }
    }

    /// One inbound host message, processed to completion.
    pub fn handle(&mut self, message: HostMessage) -> Vec<PreviewMessage> {
        match message {
            HostMessage::Hydrate { doc } => {
                // Full re-render: all prior render state goes, including an
                // in-progress inline edit draft.
                self.editing = None;
                self.blocks = Some(self.reflow(&doc));
                self.doc = Some(doc);
                Vec::new()
            }

            HostMessage::GetRect { id } => match self.rect_of(&id) {
                Some(rect) => vec![PreviewMessage::Rect { id, rect }],
                // Not rendered: no reply at all, never an error.
                None => Vec::new(),
            },
        }
    }

    /// User activation of the element tagged with `id`. Only rendered
    /// blocks carry the id attribute, so clicks elsewhere emit nothing.
    pub fn click(&self, id: &str) -> Vec<PreviewMessage> {
        if self.rect_of(id).is_some() {
            vec![PreviewMessage::Clicked { id: id.to_string() }]
        } else {
            Vec::new()
        }
    }

    /// Enter inline editing on a rendered, text-bearing block. Returns
    /// whether editing actually began.
    pub fn begin_text_edit(&mut self, id: &str) -> bool {
        let editable = self
            .blocks
            .as_deref()
            .into_iter()
            .flatten()
            .any(|block| block.id == id && block.text.is_some());
        if editable {
            self.editing = Some(id.to_string());
        }
        editable
    }

    /// Commit the active inline edit. The agent's own tree is untouched;
    /// the authoritative text arrives back with the next hydrate.
    pub fn commit_text_edit(&mut self, text: impl Into<String>) -> Vec<PreviewMessage> {
        match self.editing.take() {
            Some(id) => vec![PreviewMessage::InlineEditCommit {
                id,
                text: text.into(),
            }],
            None => Vec::new(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Resize the viewport. Emits `layoutChanged` only when the reflow
    /// actually moved or resized something — the out-of-band trigger the
    /// host cannot see coming.
    pub fn set_viewport_width(&mut self, width: f64) -> Vec<PreviewMessage> {
        self.viewport_width = width;
        let Some(doc) = &self.doc else {
            return Vec::new();
        };
        let reflowed = self.reflow(doc);
        if self.blocks.as_deref() == Some(reflowed.as_slice()) {
            return Vec::new();
        }
        self.blocks = Some(reflowed);
        vec![PreviewMessage::LayoutChanged]
    }

    pub fn is_hydrated(&self) -> bool {
        self.blocks.is_some()
    }

    /// Rendered blocks in paint order; empty before the first hydrate.
    pub fn blocks(&self) -> &[RenderBlock] {
        self.blocks.as_deref().unwrap_or(&[])
    }

    pub fn block(&self, id: &str) -> Option<&RenderBlock> {
        self.blocks().iter().find(|block| block.id == id)
    }

    fn rect_of(&self, id: &str) -> Option<Rect> {
        self.block(id).map(|block| block.rect)
    }

    fn reflow(&self, doc: &Document) -> Vec<RenderBlock> {
        let content_width = (self.viewport_width - 2.0 * PAGE_MARGIN).max(0.0);
        let mut y = PAGE_MARGIN;
        let mut blocks = Vec::with_capacity(doc.root.children.len());
        for child in &doc.root.children {
            let (rect, advance) = layout::place_block(child, y, content_width);
            y += advance;
            blocks.push(RenderBlock {
                id: child.id.clone(),
                kind: child.kind.clone(),
                text: child.text.clone(),
                rect,
            });
        }
        blocks
    }
}
