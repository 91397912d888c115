//! Walking a tree along a path.
//!
//! Each call is a fresh walk from the root: segments are looked up in order
//! and the first mismatch ends the walk. Lookups on a node that is not an
//! object fail with [`DecodeError::TypeMismatch`], for required and optional
//! segments alike. Only a missing optional key yields "no value".

use crate::error::{DecodeError, Metadata, Result};
use crate::path::{Key, KeyPath, OptionalKeyPath};
use crate::{Node, NodeKind};

/// Resolve `path` against `root`, failing on the first missing key
pub fn resolve<'a>(root: &'a Node, path: &KeyPath) -> Result<&'a Node> {
    let keys = path.keys();
    let mut current = root;

    for (index, key) in keys.iter().enumerate() {
        let consumed = || keys[..index].to_vec();
        current = match lookup(root, current, key, consumed)? {
            Some(next) => next,
            None => return Err(missing_key(root, current, key, consumed())),
        };
    }

    Ok(current)
}

/// Resolve `path` against `root`.
///
/// A missing required segment fails. A missing optional segment returns
/// `Ok(None)` without looking at the remaining segments.
pub fn resolve_optional<'a>(root: &'a Node, path: &OptionalKeyPath) -> Result<Option<&'a Node>> {
    let keys = path.keys();
    let mut current = root;

    for (index, segment) in keys.iter().enumerate() {
        let consumed = || -> Vec<Key> { keys[..index].iter().map(|k| k.key.clone()).collect() };
        current = match lookup(root, current, &segment.key, consumed)? {
            Some(next) => next,
            None if segment.is_required => {
                return Err(missing_key(root, current, &segment.key, consumed()));
            }
            None => {
                tracing::trace!(key = %segment.key, path = %path, "optional key absent");
                return Ok(None);
            }
        };
    }

    Ok(Some(current))
}

fn lookup<'a, F>(root: &Node, current: &'a Node, key: &str, consumed: F) -> Result<Option<&'a Node>>
where
    F: FnOnce() -> Vec<Key>,
{
    match current {
        Node::Object(map) => Ok(map.get(key)),
        other => {
            let metadata = Metadata::new(consumed(), other, root);
            tracing::trace!(key, path = %metadata.formatted_path(), actual = %other.kind(), "lookup on non-object");
            Err(DecodeError::TypeMismatch {
                expected: NodeKind::Object.to_string(),
                actual: other.kind(),
                metadata,
            })
        }
    }
}

fn missing_key(root: &Node, current: &Node, key: &str, consumed: Vec<Key>) -> DecodeError {
    let metadata = Metadata::new(consumed, current, root);
    tracing::trace!(key, path = %metadata.formatted_path(), "missing key");
    DecodeError::MissingKey {
        key: key.to_string(),
        metadata,
    }
}
