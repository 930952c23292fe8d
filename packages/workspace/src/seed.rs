use artboard_dom::{Document, Node};

/// The in-memory seed document the editor boots with: a title and a
/// paragraph under the root.
pub fn sample_document() -> Document {
    Document::new(
        Node::new("root", "root")
            .with_child(
                Node::new("title-1", "text")
                    .with_text("Welcome to the Editor")
                    .with_style("fontSize", "28px")
                    .with_style("fontWeight", "700")
                    .with_style("margin", "8px 0"),
            )
            .with_child(
                Node::new("para-1", "text")
                    .with_text("Double-click me to edit live!")
                    .with_style("color", "#374151"),
            ),
    )
}
