//! keypath: locate and decode values in JSON-shaped trees
//!
//! Given a tree (as produced by parsing a JSON document) and a path of keys,
//! keypath finds the node at that path, converts it with a caller supplied
//! decode function, and on failure reports exactly which key was missing
//! together with the sub-tree being indexed and the original root.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │                keypath                  │
//! │                                         │
//! │  path      - KeyPath / OptionalKeyPath  │
//! │  compose   - required / optional joins  │
//! │  traverse  - walking a tree             │
//! │  decode    - decode + re-anchor errors  │
//! │  error     - DecodeError + Metadata     │
//! │                                         │
//! ├─────────────────────────────────────────┤
//! │        keypath-tree (Node model)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use keypath::{decode_at, DecodeError, KeyPath, Node};
//!
//! let root = Node::object([("a", Node::object([("b", "hello")]))]);
//!
//! let value = decode_at(&root, &KeyPath::new().key("a").key("b"), |node| {
//!     node.as_str()
//!         .map(str::to_string)
//!         .ok_or_else(|| DecodeError::type_mismatch("string", node))
//! })?;
//! assert_eq!(value, "hello");
//!
//! let err = keypath::get(&root, &KeyPath::from(["a", "c"])).unwrap_err();
//! assert_eq!(err.to_string(), "missing key \"c\" at a");
//! # Ok::<(), DecodeError>(())
//! ```

pub mod decode;
pub mod error;
pub mod path;
pub mod traverse;

pub use decode::{decode_at, decode_at_optional, get, get_optional, missing_key_as_none};
pub use error::{ContextualError, DecodeError, Metadata, Result};
pub use path::{Joinable, Key, KeyPath, OptionalKey, OptionalKeyPath};
pub use traverse::{resolve, resolve_optional};

pub use keypath_tree::{Map, Node, NodeKind, Number};
