use crate::rect::Rect;
use artboard_dom::Document;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Messages sent by the host to the render surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HostMessage {
    /// Authoritative snapshot; the render surface fully re-renders from this
    /// value and discards all prior render state. Idempotent for equal
    /// documents.
    Hydrate { doc: Document },

    /// Request the current on-screen geometry of `id`. The render surface
    /// answers with exactly one `rect` bearing the same id, or nothing if
    /// the id is not currently rendered.
    GetRect { id: String },
}

/// Messages sent by the render surface to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PreviewMessage {
    /// Bootstrapping finished; ready to receive a snapshot.
    Ready,

    /// The user activated the node with this id.
    Clicked { id: String },

    /// Geometry answer to a `getRect`. The host applies it only if `id`
    /// still matches the current selection at arrival time.
    Rect { id: String, rect: Rect },

    /// Layout reflowed independent of a hydrate (async content, font load,
    /// viewport resize).
    LayoutChanged,

    /// The user finished in-place text editing.
    InlineEditCommit { id: String, text: String },
}

impl HostMessage {
    /// Lenient decode of a wire value. `None` for non-objects, unrecognized
    /// tags, and malformed payloads; the caller drops those silently.
    pub fn decode(value: &Value) -> Option<HostMessage> {
        decode_tagged(value)
    }
}

impl PreviewMessage {
    /// Lenient decode of a wire value; same drop-on-failure contract as
    /// [`HostMessage::decode`].
    pub fn decode(value: &Value) -> Option<PreviewMessage> {
        decode_tagged(value)
    }
}

fn decode_tagged<T: for<'de> Deserialize<'de>>(value: &Value) -> Option<T> {
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value.clone()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use artboard_dom::Node;
    use serde_json::json;

    #[test]
    fn tags_match_the_wire_vocabulary() {
        let ready = serde_json::to_value(PreviewMessage::Ready).unwrap();
        assert_eq!(ready, json!({ "type": "ready" }));

        let clicked = serde_json::to_value(PreviewMessage::Clicked {
            id: "para-1".into(),
        })
        .unwrap();
        assert_eq!(clicked, json!({ "type": "clicked", "id": "para-1" }));

        let layout = serde_json::to_value(PreviewMessage::LayoutChanged).unwrap();
        assert_eq!(layout, json!({ "type": "layoutChanged" }));

        let get_rect = serde_json::to_value(HostMessage::GetRect {
            id: "para-1".into(),
        })
        .unwrap();
        assert_eq!(get_rect, json!({ "type": "getRect", "id": "para-1" }));

        let commit = serde_json::to_value(PreviewMessage::InlineEditCommit {
            id: "para-1".into(),
            text: "Edited".into(),
        })
        .unwrap();
        assert_eq!(
            commit,
            json!({ "type": "inlineEditCommit", "id": "para-1", "text": "Edited" })
        );
    }

    #[test]
    fn rect_reply_round_trips() {
        let msg = PreviewMessage::Rect {
            id: "para-1".into(),
            rect: Rect::new(10.0, 40.0, 300.0, 20.0),
        };
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["type"], "rect");
        assert_eq!(value["rect"]["width"], 300.0);
        assert_eq!(PreviewMessage::decode(&value), Some(msg));
    }

    #[test]
    fn hydrate_carries_the_full_document() {
        let doc = Document::new(
            Node::new("root", "root")
                .with_child(Node::new("title-1", "text").with_text("Welcome")),
        );
        let value = serde_json::to_value(&HostMessage::Hydrate { doc: doc.clone() }).unwrap();
        assert_eq!(value["type"], "hydrate");
        assert_eq!(value["doc"]["root"]["children"][0]["id"], "title-1");
        assert_eq!(HostMessage::decode(&value), Some(HostMessage::Hydrate { doc }));
    }

    #[test]
    fn non_objects_decode_to_none() {
        for value in [json!(null), json!(42), json!("hydrate"), json!([1, 2])] {
            assert_eq!(PreviewMessage::decode(&value), None);
            assert_eq!(HostMessage::decode(&value), None);
        }
    }

    #[test]
    fn unknown_tags_decode_to_none() {
        assert_eq!(PreviewMessage::decode(&json!({ "type": "teleport" })), None);
        assert_eq!(PreviewMessage::decode(&json!({ "noType": true })), None);
        assert_eq!(HostMessage::decode(&json!({ "type": "ready" })), None);
    }

    #[test]
    fn malformed_payloads_decode_to_none() {
        // Recognized tag, wrong field shape.
        assert_eq!(PreviewMessage::decode(&json!({ "type": "clicked" })), None);
        assert_eq!(
            PreviewMessage::decode(&json!({ "type": "rect", "id": "a", "rect": "big" })),
            None
        );
        assert_eq!(HostMessage::decode(&json!({ "type": "getRect", "id": 7 })), None);
    }
}
