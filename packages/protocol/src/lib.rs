//! # Artboard Protocol
//!
//! The message shapes exchanged between the host and the render surface.
//!
//! Every message is a flat record with a required string `type` tag, modeled
//! here as closed tagged unions so handling is exhaustive by construction.
//! Decoding is lenient: a value that is not an object, has no recognized
//! tag, or carries a malformed payload decodes to `None` and the caller
//! drops it. Nothing on this boundary raises.
//!
//! Protocol invariants:
//! - The render surface never mutates the authoritative document; it reports
//!   facts (clicks, geometry, committed text) and renders what it is given.
//! - The host never reads layout state directly; all geometry crosses the
//!   boundary as a `getRect` request answered by at most one `rect` reply.
//! - Delivery is at-most-once per send and unordered across directions; the
//!   only correlation is the node id carried by `getRect`/`rect`.

mod message;
mod rect;

pub use message::{HostMessage, PreviewMessage};
pub use rect::Rect;
