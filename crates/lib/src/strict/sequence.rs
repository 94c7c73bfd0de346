//! Strict decorator for sequences.

use chrono::{NaiveDate, NaiveDateTime};

use super::{DATE_TIME_TYPE, DATE_TYPE, FLOAT_TYPE, INTEGER_TYPE, require};
use crate::{
    Result,
    node::{Mapping, Node, ScalarStyle, Sequence, SequenceAccess},
};

/// Index rendering used in error messages
struct Index(usize);

impl std::fmt::Display for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// A [`SequenceAccess`] decorator that fails with
/// [`NodeError::NodeNotFound`](crate::NodeError::NodeNotFound) instead of
/// returning `None`. The error names the index as `[i]`.
#[derive(Debug)]
pub struct StrictSequence<'a, S: ?Sized> {
    decorated: &'a S,
}

impl<S: ?Sized> Clone for StrictSequence<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for StrictSequence<'_, S> {}

impl<'a, S: SequenceAccess + ?Sized> StrictSequence<'a, S> {
    pub fn new(decorated: &'a S) -> Self {
        Self { decorated }
    }

    pub fn decorated(&self) -> &'a S {
        self.decorated
    }

    pub fn values(&self) -> impl Iterator<Item = &'a Node> {
        self.decorated.values()
    }

    pub fn len(&self) -> usize {
        self.decorated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorated.is_empty()
    }

    pub fn value(&self, index: usize) -> Result<&'a Node> {
        require(self.decorated.value(index), Index(index), Node::NODE_TYPE)
    }

    pub fn mapping(&self, index: usize) -> Result<&'a Mapping> {
        require(self.decorated.mapping(index), Index(index), Node::MAPPING_TYPE)
    }

    pub fn sequence(&self, index: usize) -> Result<&'a Sequence> {
        require(self.decorated.sequence(index), Index(index), Node::SEQUENCE_TYPE)
    }

    pub fn string(&self, index: usize) -> Result<&'a str> {
        require(
            self.decorated.string(index),
            Index(index),
            ScalarStyle::Plain.name(),
        )
    }

    pub fn folded_block_scalar(&self, index: usize) -> Result<&'a str> {
        require(
            self.decorated.folded_block_scalar(index),
            Index(index),
            ScalarStyle::FoldedBlock.name(),
        )
    }

    pub fn literal_block_scalar(&self, index: usize) -> Result<&'a [String]> {
        require(
            self.decorated.literal_block_scalar(index),
            Index(index),
            ScalarStyle::LiteralBlock.name(),
        )
    }

    pub fn integer(&self, index: usize) -> Result<i64> {
        require(self.decorated.integer(index), Index(index), INTEGER_TYPE)
    }

    pub fn float(&self, index: usize) -> Result<f64> {
        require(self.decorated.float(index), Index(index), FLOAT_TYPE)
    }

    pub fn date(&self, index: usize) -> Result<NaiveDate> {
        require(self.decorated.date(index), Index(index), DATE_TYPE)
    }

    pub fn date_time(&self, index: usize) -> Result<NaiveDateTime> {
        require(self.decorated.date_time(index), Index(index), DATE_TIME_TYPE)
    }
}
