//! Scalar leaf nodes.
//!
//! A [`Scalar`] holds literal text. Besides plain scalars there are two block
//! sub-kinds, folded (`>`) and literal (`|`), which keep the original lines and
//! expose the joined text. The sub-kind is part of a scalar's identity: a plain
//! `"k"` and a folded block `"k"` are different nodes.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// Presentation sub-kind of a [`Scalar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalarStyle {
    /// Single-line text, quoted or not
    Plain,
    /// Multi-line text whose lines are folded into one paragraph per block
    FoldedBlock,
    /// Multi-line text kept line by line
    LiteralBlock,
}

impl ScalarStyle {
    /// Returns a human-readable name for this style
    pub fn name(&self) -> &'static str {
        match self {
            ScalarStyle::Plain => "String",
            ScalarStyle::FoldedBlock => "Folded Block Scalar",
            ScalarStyle::LiteralBlock => "Literal Block Scalar",
        }
    }
}

/// A leaf node holding literal text.
///
/// # Examples
///
/// ```
/// use yamltree::{Scalar, ScalarStyle};
///
/// let plain = Scalar::plain("eo");
/// assert_eq!(plain.value(), "eo");
/// assert_eq!(plain.style(), ScalarStyle::Plain);
///
/// let folded = Scalar::folded_block(["a long", "sentence", "", "next"]);
/// assert_eq!(folded.value(), "a long sentence\nnext");
/// assert_ne!(Scalar::plain("x"), Scalar::folded_block(["x"]));
/// ```
///
/// Equality and hashing look at the style and the text only. Two folded blocks
/// whose lines fold to the same text are the same scalar.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "ScalarRepr", into = "ScalarRepr")
)]
pub struct Scalar {
    style: ScalarStyle,
    /// Text as seen by readers; folded/joined for block styles
    value: String,
    /// Source lines of a block scalar, empty for plain scalars
    lines: Vec<String>,
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.style == other.style && self.value == other.value
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.style.hash(state);
        self.value.hash(state);
    }
}

/// Wire form of a [`Scalar`]: plain scalars carry their text, block scalars
/// their lines. Deserializing rebuilds through the constructors so the text of
/// a block scalar is always derived from its lines.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ScalarRepr {
    style: ScalarStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    lines: Vec<String>,
}

#[cfg(feature = "serde")]
impl From<ScalarRepr> for Scalar {
    fn from(repr: ScalarRepr) -> Self {
        match repr.style {
            ScalarStyle::Plain => Scalar::plain(repr.value.unwrap_or_default()),
            ScalarStyle::FoldedBlock => Scalar::folded_block(repr.lines),
            ScalarStyle::LiteralBlock => Scalar::literal_block(repr.lines),
        }
    }
}

#[cfg(feature = "serde")]
impl From<Scalar> for ScalarRepr {
    fn from(scalar: Scalar) -> Self {
        match scalar.style {
            ScalarStyle::Plain => ScalarRepr {
                style: scalar.style,
                value: Some(scalar.value),
                lines: Vec::new(),
            },
            ScalarStyle::FoldedBlock | ScalarStyle::LiteralBlock => ScalarRepr {
                style: scalar.style,
                value: None,
                lines: scalar.lines,
            },
        }
    }
}

impl Scalar {
    /// Creates a plain scalar.
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            style: ScalarStyle::Plain,
            value: value.into(),
            lines: Vec::new(),
        }
    }

    /// Creates a folded block scalar from its content lines.
    ///
    /// The lines are folded once, here: see [`fold_lines`].
    pub fn folded_block<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        Self {
            style: ScalarStyle::FoldedBlock,
            value: fold_lines(&lines),
            lines,
        }
    }

    /// Creates a literal block scalar from its content lines.
    pub fn literal_block<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        Self {
            style: ScalarStyle::LiteralBlock,
            value: lines.join("\n"),
            lines,
        }
    }

    pub fn style(&self) -> ScalarStyle {
        self.style
    }

    /// The text of this scalar. For block scalars this is the folded or
    /// joined form of [`Scalar::lines`].
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Source lines of a block scalar. Empty for plain scalars.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_plain(&self) -> bool {
        self.style == ScalarStyle::Plain
    }

    pub fn is_folded_block(&self) -> bool {
        self.style == ScalarStyle::FoldedBlock
    }

    pub fn is_literal_block(&self) -> bool {
        self.style == ScalarStyle::LiteralBlock
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::plain(s)
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::plain(s)
    }
}

/// Folds block scalar lines into a single text.
///
/// Consecutive non-blank lines are joined with a single space. Every blank
/// line becomes one line break and ends the current paragraph.
pub fn fold_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut folded = String::with_capacity(lines.iter().map(|l| l.as_ref().len() + 1).sum());
    let mut in_paragraph = false;
    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            folded.push('\n');
            in_paragraph = false;
        } else {
            if in_paragraph {
                folded.push(' ');
            }
            folded.push_str(line);
            in_paragraph = true;
        }
    }
    folded
}
