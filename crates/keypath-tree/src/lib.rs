//! Tree model for keypath.
//!
//! A [`Node`] is the decoded form of a JSON document: either a dictionary of
//! key to node, or one of the leaf shapes. Trees are owned by the caller and
//! are never mutated by path traversal.
//!
//! This crate is `no_std` compatible (with `alloc`). Enable the `json`
//! feature to convert from and to `serde_json::Value`, and the `serde`
//! feature to (de)serialize nodes directly.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod node;

#[cfg(feature = "json")]
mod json;

pub use node::{Map, Node, NodeKind, Number};
