//! Lookup keys for mappings.
//!
//! Any [`Node`] can be a mapping key. String keys are shorthand for a plain
//! [`Scalar`], and this module is the one place where that normalization
//! happens: every accessor takes `impl Into<Key>`, so `mapping("k")` and
//! `mapping(Scalar::plain("k"))` look up exactly the same node.

use std::{borrow::Cow, fmt};

use super::{Node, Scalar};

/// A borrowed or owned key node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key<'a>(Cow<'a, Node>);

impl Key<'_> {
    /// The node this key compares against mapping keys with
    pub fn as_node(&self) -> &Node {
        &self.0
    }

    pub fn into_node(self) -> Node {
        self.0.into_owned()
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_node(), f)
    }
}

impl From<&str> for Key<'_> {
    fn from(s: &str) -> Self {
        Key(Cow::Owned(Node::Scalar(Scalar::plain(s))))
    }
}

impl From<String> for Key<'_> {
    fn from(s: String) -> Self {
        Key(Cow::Owned(Node::Scalar(Scalar::plain(s))))
    }
}

impl From<&String> for Key<'_> {
    fn from(s: &String) -> Self {
        Key::from(s.as_str())
    }
}

impl From<Scalar> for Key<'_> {
    fn from(scalar: Scalar) -> Self {
        Key(Cow::Owned(Node::Scalar(scalar)))
    }
}

impl From<Node> for Key<'_> {
    fn from(node: Node) -> Self {
        Key(Cow::Owned(node))
    }
}

impl<'a> From<&'a Node> for Key<'a> {
    fn from(node: &'a Node) -> Self {
        Key(Cow::Borrowed(node))
    }
}

impl<'a> From<&'a Key<'_>> for Key<'a> {
    fn from(key: &'a Key<'_>) -> Self {
        Key(Cow::Borrowed(key.as_node()))
    }
}
