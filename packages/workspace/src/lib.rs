//! # Artboard Workspace
//!
//! Runs the host and the render surface as two concurrently executing,
//! single-threaded actors joined only by an unordered message channel —
//! the in-process stand-in for the editor's isolated execution contexts.
//!
//! Each actor processes one inbound message to completion before the next,
//! owns its state exclusively, and never blocks: every cross-context
//! interaction is a fire-and-forget send answered (or not) by a later,
//! independently delivered message. There are no timeouts and no retries
//! anywhere in the loop; a reply that never comes leaves the overlay stale
//! until the next natural request cycle.

mod seed;
mod session;
mod wire;

pub use seed::sample_document;
pub use session::{EditorSession, HostSnapshot, PreviewSnapshot, SessionError};
pub use wire::{pair, Wire, WireError};
