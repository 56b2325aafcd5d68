#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing the literal notation.
pub enum ParseError {
    /// Found a `)` with no matching `(` before it.
    UnexpectedClosingParen {
        /// Byte offset of the parenthesis in the input.
        position: usize,
    },
    /// A `(` was never closed.
    UnclosedParen {
        /// Byte offset of the parenthesis in the input.
        position: usize,
    },
    /// A value starts with a quote that does not also end it.
    UnterminatedQuote {
        /// The offending value, as typed.
        token: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedClosingParen { position } => write!(f,
                                                                "Error at offset {position}: Found ')' without a matching '('."),
            Self::UnclosedParen { position } => {
                write!(f, "Error at offset {position}: Parenthesis '(' is never closed.")
            },
            Self::UnterminatedQuote { token } => {
                write!(f, "Unterminated quote in value {token}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
