//! Failure taxonomy and the context carried with every failure.

use std::error::Error as StdError;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::path::Key;
use crate::{Node, NodeKind};

pub type Result<T, E = DecodeError> = std::result::Result<T, E>;

/// Where a failure happened.
///
/// `path` is the key sequence successfully resolved before the failure,
/// `object` is the node at which resolution stopped, and `root` is the tree
/// the path was resolved against. Crossing an enclosing decode boundary
/// extends `path` and replaces `root`, so at the top level they describe the
/// failure relative to the whole document.
///
/// `object` and `root` are owned copies, and every enclosing decode boundary
/// clones its own root again: a failure raised `d` levels deep costs about
/// `d` copies of the document. Code that probes many possibly absent fields
/// should prefer [`crate::resolve_optional`] over decoding and discarding
/// [`DecodeError::MissingKey`] failures.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Metadata {
    pub path: Vec<Key>,
    pub object: Node,
    pub root: Node,
}

impl Metadata {
    pub fn new(path: Vec<Key>, object: &Node, root: &Node) -> Self {
        Self {
            path,
            object: object.clone(),
            root: root.clone(),
        }
    }

    /// Context for a failure raised while decoding `node` itself
    pub fn at(node: &Node) -> Self {
        Self::new(Vec::new(), node, node)
    }

    /// Keys joined with `.`
    pub fn formatted_path(&self) -> String {
        self.path.join(".")
    }

    /// Human readable location, `<root>` for the empty path
    pub fn location(&self) -> String {
        if self.path.is_empty() {
            "<root>".to_string()
        } else {
            self.formatted_path()
        }
    }

    /// Re-anchor this context under `outer`, resolved against `root`
    pub fn prepend(&mut self, outer: &[Key], root: &Node) {
        let mut path = Vec::with_capacity(outer.len() + self.path.len());
        path.extend_from_slice(outer);
        path.append(&mut self.path);
        self.path = path;
        self.root = root.clone();
    }
}

/// Failures raised by path resolution, or by decoders that want their
/// failures located within the document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// A key required by the path was absent from an object.
    #[error("missing key \"{key}\" at {}", .metadata.location())]
    MissingKey { key: Key, metadata: Metadata },

    /// A node did not have the expected shape.
    #[error("type mismatch at {}: expected {expected}, got {actual}", .metadata.location())]
    TypeMismatch {
        expected: String,
        actual: NodeKind,
        metadata: Metadata,
    },

    /// A node had the expected shape but an unacceptable value.
    #[error("invalid value at {}: {message}", .metadata.location())]
    InvalidValue { message: String, metadata: Metadata },
}

impl DecodeError {
    /// `node` was not of the `expected` shape
    pub fn type_mismatch(expected: impl Into<String>, node: &Node) -> Self {
        DecodeError::TypeMismatch {
            expected: expected.into(),
            actual: node.kind(),
            metadata: Metadata::at(node),
        }
    }

    /// `node` has the right shape but an unacceptable value
    pub fn invalid_value(message: impl Into<String>, node: &Node) -> Self {
        DecodeError::InvalidValue {
            message: message.into(),
            metadata: Metadata::at(node),
        }
    }

    pub fn metadata(&self) -> &Metadata {
        match self {
            DecodeError::MissingKey { metadata, .. }
            | DecodeError::TypeMismatch { metadata, .. }
            | DecodeError::InvalidValue { metadata, .. } => metadata,
        }
    }

    pub fn metadata_mut(&mut self) -> &mut Metadata {
        match self {
            DecodeError::MissingKey { metadata, .. }
            | DecodeError::TypeMismatch { metadata, .. }
            | DecodeError::InvalidValue { metadata, .. } => metadata,
        }
    }

    pub fn path(&self) -> &[Key] {
        &self.metadata().path
    }

    pub fn is_missing_key(&self) -> bool {
        matches!(self, DecodeError::MissingKey { .. })
    }
}

/// An error type that decode functions may return.
///
/// Anything built from a [`DecodeError`] can be re-anchored as it crosses a
/// decode boundary. Errors that do not embed one pass through untouched.
pub trait ContextualError: From<DecodeError> {
    fn as_decode_error(&self) -> Option<&DecodeError>;

    fn as_decode_error_mut(&mut self) -> Option<&mut DecodeError>;
}

impl ContextualError for DecodeError {
    fn as_decode_error(&self) -> Option<&DecodeError> {
        Some(self)
    }

    fn as_decode_error_mut(&mut self) -> Option<&mut DecodeError> {
        Some(self)
    }
}

impl ContextualError for anyhow::Error {
    fn as_decode_error(&self) -> Option<&DecodeError> {
        self.downcast_ref::<DecodeError>()
    }

    fn as_decode_error_mut(&mut self) -> Option<&mut DecodeError> {
        self.downcast_mut::<DecodeError>()
    }
}

impl ContextualError for Box<dyn StdError + Send + Sync> {
    fn as_decode_error(&self) -> Option<&DecodeError> {
        self.downcast_ref::<DecodeError>()
    }

    fn as_decode_error_mut(&mut self) -> Option<&mut DecodeError> {
        self.downcast_mut::<DecodeError>()
    }
}
