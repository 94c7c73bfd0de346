//! Strict-access decorators.
//!
//! Plain lookups on [`MappingAccess`](crate::MappingAccess) and
//! [`SequenceAccess`](crate::SequenceAccess) answer `None` when nothing of the
//! requested kind is found. The decorators here borrow such a collection, expose
//! the same accessor surface, and turn every `None` into a
//! [`NodeError::NodeNotFound`] naming the key and the kind that was asked for.
//!
//! Strictness applies only at the call site: nested mappings and sequences are
//! returned as they are, not wrapped again.
//!
//! ```
//! use yamltree::{Mapping, MappingAccess, Sequence};
//!
//! let doc = Mapping::new()
//!     .with("name", "eo")
//!     .with("tags", Sequence::from_iter(["a", "b"]));
//! let strict = doc.strict();
//!
//! assert_eq!(strict.string("name").unwrap(), "eo");
//! assert!(strict.mapping("tags").unwrap_err().is_not_found());
//! assert_eq!(
//!     strict.string("missing").unwrap_err().to_string(),
//!     "No String found for key missing"
//! );
//! ```

use std::fmt;

use crate::{Result, node::NodeError};

mod mapping;
mod sequence;

pub use mapping::StrictMapping;
pub use sequence::StrictSequence;

pub(crate) const INTEGER_TYPE: &str = "Integer";
pub(crate) const FLOAT_TYPE: &str = "Float";
pub(crate) const DATE_TYPE: &str = "Date";
pub(crate) const DATE_TIME_TYPE: &str = "DateTime";

/// Converts an absent lookup result into [`NodeError::NodeNotFound`].
pub(crate) fn require<T>(found: Option<T>, key: impl fmt::Display, expected: &str) -> Result<T> {
    found.ok_or_else(|| {
        let key = key.to_string();
        tracing::debug!(key = %key, expected, "strict lookup found no node");
        NodeError::NodeNotFound {
            key,
            expected: expected.to_string(),
        }
        .into()
    })
}
