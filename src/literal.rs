/// Numeric/text typing of literal values.
///
/// Decides whether a typed value becomes an integer, a decimal or text, and
/// strips the optional quotes around it. Coercion never fails: anything that
/// does not read as a number is kept as text.
pub mod coerce;
/// The lexer module tokenizes literal input for the splitter.
///
/// The literal notation only has three delimiters, `(`, `)` and `,`;
/// everything in between is kept as a raw chunk together with its byte span.
pub mod lexer;
/// The parser module turns literal input into a set.
///
/// # Responsibilities
/// - Splits the input into top-level values on commas outside parentheses.
/// - Reads parenthesized values as tuples and everything else as atoms.
/// - Reports unbalanced parentheses and unterminated quotes.
pub mod parser;

pub use parser::{LITERAL_HINT, ParseResult, parse, parse_or_empty};
