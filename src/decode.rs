//! Decoding values found at a path.
//!
//! The adapters resolve a path, hand the node to a caller supplied decode
//! function, and re-anchor any [`DecodeError`] coming out of that function
//! under the path that led to it. Decode functions may themselves call back
//! into these adapters on the node they were given; however deep the nesting,
//! the failure reaching the top-level caller carries the full key sequence
//! from the document root and the document root itself.

use crate::error::{ContextualError, DecodeError, Result};
use crate::path::{Key, KeyPath, OptionalKeyPath};
use crate::traverse;
use crate::Node;

/// Resolve `path` against `root` and decode the node found there.
///
/// Resolution failures are returned as is. Failures from `decode` that embed a
/// [`DecodeError`] get `path` prepended and their root replaced by `root`;
/// any other error passes through unaltered.
pub fn decode_at<T, E, F>(root: &Node, path: &KeyPath, decode: F) -> Result<T, E>
where
    E: ContextualError,
    F: FnOnce(&Node) -> Result<T, E>,
{
    let node = traverse::resolve(root, path)?;
    decode(node).map_err(|err| reanchor(err, path.keys(), root))
}

/// Optional counterpart of [`decode_at`].
///
/// Returns `Ok(None)` without calling `decode` when an optional segment is
/// absent. A `None` produced by `decode` for a present node is returned as is.
pub fn decode_at_optional<T, E, F>(root: &Node, path: &OptionalKeyPath, decode: F) -> Result<Option<T>, E>
where
    E: ContextualError,
    F: FnOnce(&Node) -> Result<Option<T>, E>,
{
    let Some(node) = traverse::resolve_optional(root, path)? else {
        return Ok(None);
    };
    decode(node).map_err(|err| reanchor(err, &path.key_names(), root))
}

/// Owned copy of the node at `path`
pub fn get(root: &Node, path: &KeyPath) -> Result<Node> {
    decode_at(root, path, |node| Ok(node.clone()))
}

/// Owned copy of the node at `path`, `None` if an optional segment is absent
pub fn get_optional(root: &Node, path: &OptionalKeyPath) -> Result<Option<Node>> {
    decode_at_optional(root, path, |node| Ok(Some(node.clone())))
}

/// Turn a [`DecodeError::MissingKey`] failure into `Ok(None)`. Every other
/// failure is kept.
pub fn missing_key_as_none<T, E: ContextualError>(result: Result<T, E>) -> Result<Option<T>, E> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.as_decode_error().is_some_and(DecodeError::is_missing_key) => Ok(None),
        Err(err) => Err(err),
    }
}

fn reanchor<E: ContextualError>(mut err: E, path: &[Key], root: &Node) -> E {
    if let Some(inner) = err.as_decode_error_mut() {
        inner.metadata_mut().prepend(path, root);
        tracing::trace!(path = %inner.metadata().formatted_path(), "re-anchored decode failure");
    }
    err
}
