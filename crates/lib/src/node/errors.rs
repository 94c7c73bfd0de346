//! Error types for node lookups.
//!
//! Plain lookups never fail, they return `None`. The strict decorators are the
//! only place absence becomes an error, and there is exactly one error kind for
//! it: the key is missing, or it holds a node of another kind. The two causes
//! are deliberately not told apart.

use thiserror::Error;

/// Structured error type for strict node lookups.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    /// No node of the expected kind exists at the key
    #[error("No {expected} found for key {key}")]
    NodeNotFound { key: String, expected: String },
}

impl NodeError {
    /// Check if this error indicates a node was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, NodeError::NodeNotFound { .. })
    }

    /// Get the rendered key (or `[index]`) that failed
    pub fn key(&self) -> &str {
        match self {
            NodeError::NodeNotFound { key, .. } => key,
        }
    }

    /// Get the node kind the accessor asked for
    pub fn expected(&self) -> &str {
        match self {
            NodeError::NodeNotFound { expected, .. } => expected,
        }
    }
}

// Conversion from NodeError to the main Error type
impl From<NodeError> for crate::Error {
    fn from(err: NodeError) -> Self {
        crate::Error::Node(err)
    }
}
