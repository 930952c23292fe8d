use artboard_dom::Document;
use artboard_protocol::Rect;

/// Read model over the currently selected node, for the inspector panel.
///
/// Borrowed from the controller's current document snapshot; a stale
/// selection (the id no longer resolves) never produces one of these.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub(crate) doc: &'a Document,
    pub(crate) id: &'a str,
    pub(crate) index: usize,
    pub(crate) sibling_count: usize,
}

impl<'a> Selection<'a> {
    pub fn id(&self) -> &'a str {
        self.id
    }

    pub fn text(&self) -> Option<&'a str> {
        self.doc.node(self.id)?.text.as_deref()
    }

    /// Inline style override for `property` on the selected node. The panel
    /// reads `fontSize`, `color`, `width`, `height`, `padding`; absence
    /// means "no override".
    pub fn style(&self, property: &str) -> Option<&'a str> {
        self.doc.node(self.id)?.style(property)
    }

    /// Zero-based index within the sibling list, and the list's length —
    /// "sibling i of n" in the inspector.
    pub fn position(&self) -> (usize, usize) {
        (self.index, self.sibling_count)
    }

    /// Whether the move-up control must be disabled.
    pub fn at_top(&self) -> bool {
        self.index == 0
    }

    /// Whether the move-down control must be disabled.
    pub fn at_bottom(&self) -> bool {
        self.index + 1 == self.sibling_count
    }
}

/// Placement of the purely visual selection overlay, mapped from the cached
/// rect. The overlay takes no pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<Rect> for Overlay {
    fn from(rect: Rect) -> Self {
        Self {
            left: rect.x,
            top: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}
