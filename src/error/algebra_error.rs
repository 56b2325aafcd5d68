use crate::value::Element;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that set and relation operations can report.
pub enum AlgebraError {
    /// An operation that needs a relation received a set containing an
    /// element that is not an ordered pair of atoms.
    NotARelation {
        /// The smallest element that is not a pair.
        element: Element,
    },
    /// An argument was invalid or out of range.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
}

impl std::fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotARelation { element } => write!(f,
                                                     "Not a relation: element {element} is not an ordered pair."),
            Self::InvalidArgument { details } => write!(f, "Invalid argument: {details}."),
        }
    }
}

impl std::error::Error for AlgebraError {}
