//! # Artboard Host
//!
//! The host synchronization controller: the one owner of the authoritative
//! document, the current selection, and the last known geometry of the
//! selected node.
//!
//! The controller is an explicit, injectable object — no statics, no ambient
//! state — so independent editor instances coexist and unit tests never
//! interfere with each other. Every inbound message either fully applies or
//! is a documented no-op, and every document change returns the outbound
//! messages that re-synchronize the render surface; callers cannot mutate
//! without notifying.

mod controller;
mod selection;

pub use controller::HostController;
pub use selection::{Overlay, Selection};
