use std::fmt::Display;

use ordered_float::OrderedFloat;

use crate::literal::coerce::coerce_atom;

/// A scalar value that can appear in a set or as a component of a pair.
///
/// Equality, ordering and hashing all look at the tag first, so
/// `Integer(1)` and `Float(1.0)` are different atoms.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Atom {
    /// An integer such as `-4` or `42`.
    Integer(i64),
    /// A decimal such as `2.5`.
    Float(OrderedFloat<f64>),
    /// Anything that did not read as a number, such as `a` or `'1'`.
    Text(String),
}

impl Atom {
    /// Returns `true` if this atom is a `Text` atom.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Tests whether a text atom is displayed in quotes.
    ///
    /// Quotes keep numeric-looking text such as `'1'` apart from the number
    /// `1`, and make empty text and text with delimiters or surrounding
    /// whitespace visible.
    fn needs_quotes(text: &str) -> bool {
        text.is_empty()
        || text.trim() != text
        || text.starts_with(['\'', '"'])
        || text.contains(['(', ')', ','])
        || !coerce_atom(text).is_text()
    }
}

impl From<i64> for Atom {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

// Unsuffixed integer literals default to `i32`.
impl From<i32> for Atom {
    fn from(i: i32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<f64> for Atom {
    fn from(f: f64) -> Self {
        Self::Float(OrderedFloat(f))
    }
}

impl From<&str> for Atom {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Atom {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(r) => {
                let r = r.into_inner();
                // Keep a trailing `.0` so that the float does not read back
                // as an integer.
                if r.is_finite() && r.fract() == 0.0 {
                    write!(f, "{r:.1}")
                } else {
                    write!(f, "{r}")
                }
            },
            Self::Text(s) if Self::needs_quotes(s) => write!(f, "'{s}'"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}
