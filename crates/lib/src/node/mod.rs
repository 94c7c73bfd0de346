//! The document node model.
//!
//! Every element of a document is a [`Node`]: a [`Mapping`], a [`Sequence`] or
//! a [`Scalar`]. Nodes are immutable once built. Containers own their children
//! and equality is structural all the way down.
//!
//! # Lookups
//!
//! Typed reads go through two capability traits:
//!
//! - [`MappingAccess`] - keyed lookups (`mapping`, `sequence`, `string`, ...)
//! - [`SequenceAccess`] - the same family addressed by index
//!
//! Both return `None` when the key is absent *or* holds another kind of node.
//! Wrap them in [`crate::strict`] decorators to turn `None` into an error.
//!
//! ```
//! use yamltree::{Mapping, MappingAccess, Scalar, Sequence};
//!
//! let doc = Mapping::new()
//!     .with("name", "eo")
//!     .with("tags", Sequence::from_iter(["a", "b"]));
//!
//! assert_eq!(doc.string("name"), Some("eo"));
//! assert_eq!(doc.string(Scalar::plain("name")), Some("eo"));
//! assert!(doc.mapping("tags").is_none());
//! ```

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

pub mod errors;
pub mod key;
pub mod mapping;
pub mod scalar;
pub mod sequence;

pub use errors::NodeError;
pub use key::Key;
pub use mapping::{Mapping, MappingAccess};
pub use scalar::{Scalar, ScalarStyle};
pub use sequence::{Sequence, SequenceAccess};

/// The variant tag of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Mapping,
    Sequence,
    Scalar,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Mapping => Node::MAPPING_TYPE,
            NodeKind::Sequence => Node::SEQUENCE_TYPE,
            NodeKind::Scalar => Node::SCALAR_TYPE,
        };
        f.write_str(name)
    }
}

/// A document element.
///
/// Two nodes are equal when they are the same variant with equal content.
/// Mapping equality ignores entry order, sequence equality does not.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    Mapping(Mapping),
    Sequence(Sequence),
    Scalar(Scalar),
}

impl Node {
    /// Type name for any node
    pub const NODE_TYPE: &'static str = "Node";
    /// Type name for Mapping variant
    pub const MAPPING_TYPE: &'static str = "Mapping";
    /// Type name for Sequence variant
    pub const SEQUENCE_TYPE: &'static str = "Sequence";
    /// Type name for Scalar variant
    pub const SCALAR_TYPE: &'static str = "Scalar";

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Mapping(_) => NodeKind::Mapping,
            Node::Sequence(_) => NodeKind::Sequence,
            Node::Scalar(_) => NodeKind::Scalar,
        }
    }

    /// Returns a human-readable name for this node type
    pub fn type_name(&self) -> &'static str {
        match self.kind() {
            NodeKind::Mapping => Self::MAPPING_TYPE,
            NodeKind::Sequence => Self::SEQUENCE_TYPE,
            NodeKind::Scalar => Self::SCALAR_TYPE,
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Node::Mapping(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Node::Sequence(_))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    /// Attempts to view this node as a Mapping
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Attempts to view this node as a Sequence
    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Node::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }

    /// Attempts to view this node as a Scalar of any style
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Text of a plain scalar. Block scalars are not strings.
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar()
            .filter(|scalar| scalar.is_plain())
            .map(Scalar::value)
    }

    /// Folded text of a folded block scalar
    pub fn as_folded_block(&self) -> Option<&str> {
        self.as_scalar()
            .filter(|scalar| scalar.is_folded_block())
            .map(Scalar::value)
    }

    /// Lines of a literal block scalar
    pub fn as_literal_block(&self) -> Option<&[String]> {
        self.as_scalar()
            .filter(|scalar| scalar.is_literal_block())
            .map(Scalar::lines)
    }

    /// Plain scalar text parsed as an integer
    pub fn as_integer(&self) -> Option<i64> {
        self.as_str()?.parse().ok()
    }

    /// Plain scalar text parsed as a float.
    ///
    /// Infinity and NaN use the YAML spellings (`.inf`, `-.Inf`, `.NaN`, ...);
    /// bare `inf` or `NaN` are not floats.
    pub fn as_float(&self) -> Option<f64> {
        parse_float(self.as_str()?)
    }

    /// Plain scalar text parsed as an ISO-8601 date (`2020-03-14`)
    pub fn as_date(&self) -> Option<NaiveDate> {
        self.as_str()?.parse().ok()
    }

    /// Plain scalar text parsed as an ISO-8601 local date-time (`2020-03-14T10:15:30`)
    pub fn as_date_time(&self) -> Option<NaiveDateTime> {
        self.as_str()?.parse().ok()
    }
}

fn parse_float(text: &str) -> Option<f64> {
    match text {
        ".inf" | ".Inf" | ".INF" | "+.inf" | "+.Inf" | "+.INF" => Some(f64::INFINITY),
        "-.inf" | "-.Inf" | "-.INF" => Some(f64::NEG_INFINITY),
        ".nan" | ".NaN" | ".NAN" => Some(f64::NAN),
        _ if text
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-' | b'e' | b'E')) =>
        {
            text.parse().ok()
        }
        _ => None,
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Mapping(mapping) => write!(f, "{mapping}"),
            Node::Sequence(sequence) => write!(f, "{sequence}"),
            Node::Scalar(scalar) => write!(f, "{scalar}"),
        }
    }
}

impl From<Mapping> for Node {
    fn from(mapping: Mapping) -> Self {
        Node::Mapping(mapping)
    }
}

impl From<Sequence> for Node {
    fn from(sequence: Sequence) -> Self {
        Node::Sequence(sequence)
    }
}

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Node::Scalar(scalar)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Scalar(Scalar::plain(s))
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Scalar(Scalar::plain(s))
    }
}
