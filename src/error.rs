/// Literal parsing errors.
///
/// Defines the errors raised while splitting and reading the literal notation,
/// such as unbalanced parentheses or an unterminated quote.
pub mod parse_error;
/// Algebra errors.
///
/// Contains the errors that set and relation operations can report: an
/// operand that is not a relation, or an argument outside its valid range.
pub mod algebra_error;
/// Registry errors.
///
/// Errors reported by the named-binding registry when a name is unknown or
/// protected from deletion.
pub mod registry_error;
/// Script errors.
///
/// Errors raised while executing a script. Every variant carries the line it
/// was raised on, and wraps the lower level error where there is one.
pub mod script_error;

pub use algebra_error::AlgebraError;
pub use parse_error::ParseError;
pub use registry_error::RegistryError;
pub use script_error::ScriptError;
