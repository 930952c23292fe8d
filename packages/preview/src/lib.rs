//! # Artboard Preview
//!
//! The render surface agent: the isolated side of the editor that renders
//! hydration snapshots and reports interaction and geometry back to the
//! host. It never mutates the authoritative document — committed text rides
//! an `inlineEditCommit` upstream and comes back in the next hydrate.
//!
//! Rendering here is a deterministic block-flow layout over the document's
//! direct children (the flat addressable set), standing in for the real
//! markup so `getRect` has honest, style-sensitive answers. Style values it
//! cannot parse fall back to defaults; nothing is validated.

mod agent;
mod layout;

pub use agent::{PreviewAgent, RenderBlock};
