use std::fmt::Display;

use crate::{session::operation::Evaluation, value::SetValue};

/// What a script command reports back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A set was bound to a name by a definition or a `let`.
    Bound {
        /// The normalized name.
        name: String,
        /// The set now bound to it.
        set:  SetValue,
    },
    /// A binding was deleted.
    Deleted {
        /// The normalized name.
        name: String,
    },
    /// An operation was evaluated.
    Evaluated {
        /// The call as written, with normalized names, such as `ref(R, A2)`.
        label:      String,
        /// What the operation produced.
        evaluation: Evaluation,
    },
    /// Bindings listed by `show`, in insertion order.
    Listing(Vec<(String, SetValue)>),
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bound { name, set } => write!(f, "{name} = {set}"),
            Self::Deleted { name } => write!(f, "Deleted {name}"),
            Self::Evaluated { label, evaluation } => write!(f, "{label} = {evaluation}"),
            Self::Listing(bindings) if bindings.is_empty() => write!(f, "No sets defined"),
            Self::Listing(bindings) => {
                for (i, (name, set)) in bindings.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{name} = {set}")?;
                }
                Ok(())
            },
        }
    }
}
