//! Strict decorator for mappings.

use chrono::{NaiveDate, NaiveDateTime};

use super::{DATE_TIME_TYPE, DATE_TYPE, FLOAT_TYPE, INTEGER_TYPE, require};
use crate::{
    Result,
    node::{Key, Mapping, MappingAccess, Node, ScalarStyle, Sequence},
};

/// A [`MappingAccess`] decorator that fails with
/// [`NodeError::NodeNotFound`](crate::NodeError::NodeNotFound) instead of
/// returning `None`.
///
/// It borrows the decorated mapping and never copies or changes it. Results are
/// the decorated mapping's own nodes, with the decorated mapping's lifetime.
///
/// # Examples
///
/// ```
/// use yamltree::{Mapping, MappingAccess, StrictMapping};
///
/// let inner = Mapping::new().with("port", "8080");
/// let doc = Mapping::new().with("server", inner.clone());
///
/// let strict = StrictMapping::new(&doc);
/// let server = strict.mapping("server").unwrap();
/// assert_eq!(server, &inner);
///
/// // nested results are not strict by themselves
/// assert_eq!(server.integer("host"), None);
/// assert!(server.strict().integer("host").is_err());
/// ```
#[derive(Debug)]
pub struct StrictMapping<'a, M: ?Sized> {
    decorated: &'a M,
}

impl<M: ?Sized> Clone for StrictMapping<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: ?Sized> Copy for StrictMapping<'_, M> {}

impl<'a, M: MappingAccess + ?Sized> StrictMapping<'a, M> {
    pub fn new(decorated: &'a M) -> Self {
        Self { decorated }
    }

    /// The decorated mapping
    pub fn decorated(&self) -> &'a M {
        self.decorated
    }

    /// All keys of the decorated mapping. Never fails.
    pub fn keys(&self) -> impl Iterator<Item = &'a Node> {
        self.decorated.keys()
    }

    /// All values of the decorated mapping. Never fails.
    pub fn values(&self) -> impl Iterator<Item = &'a Node> {
        self.decorated.values()
    }

    pub fn value<'k>(&self, key: impl Into<Key<'k>>) -> Result<&'a Node> {
        let key = key.into();
        require(self.decorated.value(&key), &key, Node::NODE_TYPE)
    }

    pub fn mapping<'k>(&self, key: impl Into<Key<'k>>) -> Result<&'a Mapping> {
        let key = key.into();
        require(self.decorated.mapping(&key), &key, Node::MAPPING_TYPE)
    }

    pub fn sequence<'k>(&self, key: impl Into<Key<'k>>) -> Result<&'a Sequence> {
        let key = key.into();
        require(self.decorated.sequence(&key), &key, Node::SEQUENCE_TYPE)
    }

    pub fn string<'k>(&self, key: impl Into<Key<'k>>) -> Result<&'a str> {
        let key = key.into();
        require(self.decorated.string(&key), &key, ScalarStyle::Plain.name())
    }

    pub fn folded_block_scalar<'k>(&self, key: impl Into<Key<'k>>) -> Result<&'a str> {
        let key = key.into();
        require(
            self.decorated.folded_block_scalar(&key),
            &key,
            ScalarStyle::FoldedBlock.name(),
        )
    }

    pub fn literal_block_scalar<'k>(&self, key: impl Into<Key<'k>>) -> Result<&'a [String]> {
        let key = key.into();
        require(
            self.decorated.literal_block_scalar(&key),
            &key,
            ScalarStyle::LiteralBlock.name(),
        )
    }

    pub fn integer<'k>(&self, key: impl Into<Key<'k>>) -> Result<i64> {
        let key = key.into();
        require(self.decorated.integer(&key), &key, INTEGER_TYPE)
    }

    pub fn float<'k>(&self, key: impl Into<Key<'k>>) -> Result<f64> {
        let key = key.into();
        require(self.decorated.float(&key), &key, FLOAT_TYPE)
    }

    pub fn date<'k>(&self, key: impl Into<Key<'k>>) -> Result<NaiveDate> {
        let key = key.into();
        require(self.decorated.date(&key), &key, DATE_TYPE)
    }

    pub fn date_time<'k>(&self, key: impl Into<Key<'k>>) -> Result<NaiveDateTime> {
        let key = key.into();
        require(self.decorated.date_time(&key), &key, DATE_TIME_TYPE)
    }
}
