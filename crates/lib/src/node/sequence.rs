//! Ordered lists of nodes.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use super::{Mapping, Node};
use crate::strict::StrictSequence;

/// Typed, index-addressed read access to a sequence.
///
/// Mirrors [`MappingAccess`](super::MappingAccess): implementors provide
/// [`value`](SequenceAccess::value) and [`values`](SequenceAccess::values), the
/// typed accessors derive from `value` and return `None` for an out-of-range
/// index as well as for a node of another kind.
pub trait SequenceAccess {
    /// The node at `index`, whatever its kind.
    fn value(&self, index: usize) -> Option<&Node>;

    /// All items, in order.
    fn values(&self) -> impl Iterator<Item = &Node>;

    fn len(&self) -> usize {
        self.values().count()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn mapping(&self, index: usize) -> Option<&Mapping> {
        self.value(index).and_then(Node::as_mapping)
    }

    fn sequence(&self, index: usize) -> Option<&Sequence> {
        self.value(index).and_then(Node::as_sequence)
    }

    fn string(&self, index: usize) -> Option<&str> {
        self.value(index).and_then(Node::as_str)
    }

    fn folded_block_scalar(&self, index: usize) -> Option<&str> {
        self.value(index).and_then(Node::as_folded_block)
    }

    fn literal_block_scalar(&self, index: usize) -> Option<&[String]> {
        self.value(index).and_then(Node::as_literal_block)
    }

    fn integer(&self, index: usize) -> Option<i64> {
        self.value(index).and_then(Node::as_integer)
    }

    fn float(&self, index: usize) -> Option<f64> {
        self.value(index).and_then(Node::as_float)
    }

    fn date(&self, index: usize) -> Option<NaiveDate> {
        self.value(index).and_then(Node::as_date)
    }

    fn date_time(&self, index: usize) -> Option<NaiveDateTime> {
        self.value(index).and_then(Node::as_date_time)
    }

    /// Wraps this sequence in a [`StrictSequence`].
    fn strict(&self) -> StrictSequence<'_, Self> {
        StrictSequence::new(self)
    }
}

/// An ordered list of nodes. Duplicates are allowed.
///
/// # Examples
///
/// ```
/// use yamltree::{Mapping, Sequence, SequenceAccess};
///
/// let sequence = Sequence::new()
///     .with("a")
///     .with(Mapping::new().with("k", "v"));
///
/// assert_eq!(sequence.len(), 2);
/// assert_eq!(sequence.string(0), Some("a"));
/// assert!(sequence.mapping(1).is_some());
/// assert!(sequence.value(2).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Sequence {
    items: Vec<Node>,
}

impl Sequence {
    /// Creates a new empty sequence
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Builder method to append an item and return self
    pub fn with(mut self, item: impl Into<Node>) -> Self {
        self.items.push(item.into());
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.items.iter()
    }
}

impl SequenceAccess for Sequence {
    fn value(&self, index: usize) -> Option<&Node> {
        self.items.get(index)
    }

    fn values(&self) -> impl Iterator<Item = &Node> {
        self.items.iter()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl<N: Into<Node>> FromIterator<N> for Sequence {
    fn from_iter<T: IntoIterator<Item = N>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<Node>> for Sequence {
    fn from(items: Vec<Node>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
