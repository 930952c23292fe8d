//! # Artboard DOM
//!
//! The authoritative document tree and its mutation operations.
//!
//! A [`Document`] is a single root node whose ordered `children` form the
//! editable surface. The tree is persistent: every mutation path-copies from
//! the root down to the touched node and shares all untouched subtrees
//! through `Arc`, so a caller holding an earlier snapshot keeps a valid,
//! unmodified value and `Document::clone` is a refcount bump.
//!
//! ## Core Principles
//!
//! 1. **Mutations are total**: an unknown target id or a boundary move
//!    returns the document unchanged — never an error, never a partial edit.
//! 2. **Node `type` is opaque**: mutation logic stores and ships the tag
//!    without branching on it.
//! 3. **Child order is paint order**: there is no separate z-order field;
//!    reorder operates on the sibling list itself.

mod document;
mod mutation;
mod node;

pub use document::Document;
pub use mutation::{MoveDirection, Mutation};
pub use node::{Node, StyleSet};
