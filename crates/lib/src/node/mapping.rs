//! Keyed access into a document subtree.
//!
//! [`MappingAccess`] is the capability set every mapping offers: the
//! fundamental [`value`](MappingAccess::value) lookup, key/value enumeration,
//! and a family of typed accessors derived from `value`. Typed accessors return
//! `None` both when the key is missing and when it holds a node of another kind.
//!
//! [`Mapping`] is the in-memory implementation, an insertion-ordered list of
//! entries with unique keys.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use super::{Key, Node, Sequence};
use crate::strict::StrictMapping;

/// Typed, keyed read access to a mapping.
///
/// Implementors provide [`value`](MappingAccess::value),
/// [`keys`](MappingAccess::keys) and [`values`](MappingAccess::values); every
/// typed accessor is derived from `value`. Keys are anything convertible into a
/// [`Key`]: a `&str` is shorthand for a plain scalar key.
///
/// # Examples
///
/// ```
/// use yamltree::{Mapping, MappingAccess, Scalar};
///
/// let mapping = Mapping::new()
///     .with("name", "eo")
///     .with("bio", Scalar::folded_block(["writes", "yaml"]));
///
/// assert_eq!(mapping.string("name"), Some("eo"));
/// assert_eq!(mapping.folded_block_scalar("bio"), Some("writes yaml"));
///
/// // missing and wrong-kind are both None
/// assert_eq!(mapping.string("missing"), None);
/// assert_eq!(mapping.string("bio"), None);
/// ```
pub trait MappingAccess {
    /// The node stored at `key`, whatever its kind.
    fn value<'k>(&self, key: impl Into<Key<'k>>) -> Option<&Node>;

    /// All keys, in the mapping's order.
    fn keys(&self) -> impl Iterator<Item = &Node>;

    /// All values, in the mapping's order.
    fn values(&self) -> impl Iterator<Item = &Node>;

    /// The Mapping stored at `key`.
    fn mapping<'k>(&self, key: impl Into<Key<'k>>) -> Option<&Mapping> {
        self.value(key).and_then(Node::as_mapping)
    }

    /// The Sequence stored at `key`.
    fn sequence<'k>(&self, key: impl Into<Key<'k>>) -> Option<&Sequence> {
        self.value(key).and_then(Node::as_sequence)
    }

    /// Text of the plain scalar stored at `key`.
    fn string<'k>(&self, key: impl Into<Key<'k>>) -> Option<&str> {
        self.value(key).and_then(Node::as_str)
    }

    /// Folded text of the folded block scalar stored at `key`.
    fn folded_block_scalar<'k>(&self, key: impl Into<Key<'k>>) -> Option<&str> {
        self.value(key).and_then(Node::as_folded_block)
    }

    /// Lines of the literal block scalar stored at `key`.
    fn literal_block_scalar<'k>(&self, key: impl Into<Key<'k>>) -> Option<&[String]> {
        self.value(key).and_then(Node::as_literal_block)
    }

    fn integer<'k>(&self, key: impl Into<Key<'k>>) -> Option<i64> {
        self.value(key).and_then(Node::as_integer)
    }

    fn float<'k>(&self, key: impl Into<Key<'k>>) -> Option<f64> {
        self.value(key).and_then(Node::as_float)
    }

    fn date<'k>(&self, key: impl Into<Key<'k>>) -> Option<NaiveDate> {
        self.value(key).and_then(Node::as_date)
    }

    fn date_time<'k>(&self, key: impl Into<Key<'k>>) -> Option<NaiveDateTime> {
        self.value(key).and_then(Node::as_date_time)
    }

    /// Returns true if any node is stored at `key`
    fn contains_key<'k>(&self, key: impl Into<Key<'k>>) -> bool {
        self.value(key).is_some()
    }

    /// Wraps this mapping in a [`StrictMapping`] that fails instead of
    /// returning `None`.
    fn strict(&self) -> StrictMapping<'_, Self> {
        StrictMapping::new(self)
    }
}

/// An insertion-ordered mapping node.
///
/// Keys are unique under structural equality. Equality between two mappings
/// ignores entry order.
///
/// # Examples
///
/// ```
/// use yamltree::{Mapping, MappingAccess, Node};
///
/// let mapping = Mapping::new()
///     .with("a", "1")
///     .with("b", "2")
///     .with("a", "3");
///
/// assert_eq!(mapping.len(), 2);
/// assert_eq!(mapping.string("a"), Some("3"));
///
/// let keys: Vec<&Node> = mapping.keys().collect();
/// assert_eq!(keys, [&Node::from("a"), &Node::from("b")]);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<(Node, Node)>", into = "Vec<(Node, Node)>")
)]
pub struct Mapping {
    entries: Vec<(Node, Node)>,
}

impl Mapping {
    /// Creates a new empty mapping
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builder method to add an entry and return self.
    ///
    /// A key that is already present keeps its position and gets the new value.
    pub fn with(mut self, key: impl Into<Node>, value: impl Into<Node>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter().position(|(existing, _)| *existing == key) {
            Some(index) => {
                tracing::trace!(key = %key, "replacing value of duplicate mapping key");
                self.entries[index].1 = value;
            }
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over all entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Node, &Node)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }
}

impl MappingAccess for Mapping {
    fn value<'k>(&self, key: impl Into<Key<'k>>) -> Option<&Node> {
        let key = key.into();
        self.entries
            .iter()
            .find(|(existing, _)| existing == key.as_node())
            .map(|(_, value)| value)
    }

    fn keys(&self) -> impl Iterator<Item = &Node> {
        self.entries.iter().map(|(key, _)| key)
    }

    fn values(&self) -> impl Iterator<Item = &Node> {
        self.entries.iter().map(|(_, value)| value)
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.value(key) == Some(value))
    }
}

impl Eq for Mapping {}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl<K, V> FromIterator<(K, V)> for Mapping
where
    K: Into<Node>,
    V: Into<Node>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Mapping::new(), |mapping, (key, value)| mapping.with(key, value))
    }
}

impl From<Vec<(Node, Node)>> for Mapping {
    fn from(entries: Vec<(Node, Node)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<Mapping> for Vec<(Node, Node)> {
    fn from(mapping: Mapping) -> Self {
        mapping.entries
    }
}
