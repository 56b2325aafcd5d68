use crate::{
    error::{AlgebraError, ParseError, RegistryError},
    literal::LITERAL_HINT,
};

#[derive(Debug)]
/// Represents all errors that can occur while executing a script.
pub enum ScriptError {
    /// A literal on the right-hand side of a definition failed to parse.
    Literal {
        /// The parse failure.
        source: ParseError,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// An operation rejected its operands.
    Algebra {
        /// The algebra failure.
        source: AlgebraError,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A binding could not be read or deleted.
    Registry {
        /// The registry failure.
        source: RegistryError,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// The line is not a valid command.
    MalformedCommand {
        /// Details about what was expected.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Called an unknown operation.
    UnknownOperation {
        /// The name of the operation.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to an operation.
    ArgumentCountMismatch {
        /// The name of the operation.
        name:     String,
        /// The number of arguments the operation takes.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A set name was expected, but an integer was found.
    ExpectedSet {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer was expected, but a set name was found.
    ExpectedInteger {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A verdict was expected, but the operation yields a set.
    ExpectedVerdict {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An asserted verdict was false.
    AssertionFailed {
        /// Why the verdict was false, if known.
        reason: Option<String>,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl ScriptError {
    /// Returns the line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Algebra { line, .. }
            | Self::Registry { line, .. }
            | Self::MalformedCommand { line, .. }
            | Self::UnknownOperation { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::ExpectedSet { line }
            | Self::ExpectedInteger { line }
            | Self::ExpectedVerdict { line }
            | Self::AssertionFailed { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { source, line } => {
                write!(f, "Error on line {line}: {source} {LITERAL_HINT}")
            },
            Self::Algebra { source, line } => write!(f, "Error on line {line}: {source}"),
            Self::Registry { source, line } => write!(f, "Error on line {line}: {source}"),
            Self::MalformedCommand { details, line } => {
                write!(f, "Error on line {line}: Malformed command: {details}.")
            },
            Self::UnknownOperation { name, line } => {
                write!(f, "Error on line {line}: Unknown operation '{name}'.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: '{name}' takes {expected} arguments, but {found} were given."),
            Self::ExpectedSet { line } => write!(f, "Error on line {line}: Expected set name."),
            Self::ExpectedInteger { line } => write!(f, "Error on line {line}: Expected integer."),
            Self::ExpectedVerdict { line } => {
                write!(f, "Error on line {line}: Expected a true/false operation.")
            },
            Self::AssertionFailed { reason: Some(reason),
                                    line, } => {
                write!(f, "Error on line {line}: Assertion failed: {reason}.")
            },
            Self::AssertionFailed { reason: None, line } => {
                write!(f, "Error on line {line}: Assertion failed.")
            },
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Literal { source, .. } => Some(source),
            Self::Algebra { source, .. } => Some(source),
            Self::Registry { source, .. } => Some(source),
            _ => None,
        }
    }
}
