//!
//! yamltree: the in-memory node model of a YAML document, with typed lookups
//! and a strict-access layer on top.
//!
//! ## Core Concepts
//!
//! * **Nodes (`node::Node`)**: Every document element is a Mapping, a Sequence or a Scalar. Nodes are immutable once built and compare structurally.
//! * **Scalars (`node::Scalar`)**: Leaf text, either plain or a folded/literal block. The style is part of the value: a folded block is never a plain string.
//! * **Typed lookups (`node::MappingAccess`, `node::SequenceAccess`)**: `mapping`, `sequence`, `string`, `folded_block_scalar`, `value` and friends. They return `None` when the key is missing or holds another kind of node.
//! * **Keys (`node::Key`)**: Any node can be a key. A `&str` key is shorthand for a plain scalar.
//! * **Strict access (`strict::StrictMapping`, `strict::StrictSequence`)**: Decorators exposing the same lookups that fail with `NodeError::NodeNotFound` instead of returning `None`.
//!
//! Parsing text into nodes and writing nodes back out are left to other crates.

pub mod node;
pub mod strict;

pub use node::{
    Key, Mapping, MappingAccess, Node, NodeError, NodeKind, Scalar, ScalarStyle, Sequence,
    SequenceAccess,
};
pub use strict::{StrictMapping, StrictSequence};

/// Result type used throughout the yamltree library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the yamltree library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured node errors from the node module
    #[error(transparent)]
    Node(node::NodeError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Node(_) => "node",
        }
    }

    /// Check if this error indicates a node was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Node(node_err) => node_err.is_not_found(),
        }
    }

    /// Get the underlying node error, if any.
    pub fn as_node_error(&self) -> Option<&node::NodeError> {
        match self {
            Error::Node(node_err) => Some(node_err),
        }
    }
}
