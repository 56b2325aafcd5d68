use logos::Logos;
use tracing::{debug, warn};

use crate::{
    error::ParseError,
    literal::{
        coerce::{coerce_atom, unquote},
        lexer::Token,
    },
    value::{Atom, Element, SetValue},
};

/// Result type used by the literal parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Shown to the user whenever a literal fails to parse.
pub const LITERAL_HINT: &str = "Use the format: (1,a), (2,b), (3,c)";

/// Parses a literal such as `1, 2, a` or `(1,a), (2,b)` into a set.
///
/// Top-level values are separated by commas outside parentheses. A value
/// wrapped in parentheses is a tuple whose parts are split on every comma,
/// so tuples cannot be nested. Every other value is a bare atom. Parts are
/// trimmed, may be quoted with `'` or `"`, and are typed by
/// [`coerce_atom`]. Duplicates collapse, and input with no values parses to
/// the empty set.
///
/// # Errors
/// Returns a `ParseError` if:
/// - a `)` has no matching `(`,
/// - a `(` is never closed,
/// - a value opens a quote it does not close.
///
/// # Example
/// ```
/// use relset::{
///     literal::parse,
///     value::{Element, SetValue},
/// };
///
/// let r = parse("(1,a), (2,b), (3,c)").unwrap();
///
/// assert_eq!(r,
///            SetValue::from_iter([Element::pair(1, "a"),
///                                 Element::pair(2, "b"),
///                                 Element::pair(3, "c")]));
/// ```
pub fn parse(input: &str) -> ParseResult<SetValue> {
    let tokens = split_top_level(input)?;
    debug!(count = tokens.len(), "split literal into top-level values");

    tokens.into_iter().map(parse_value).collect()
}

/// Parses a literal, falling back to the empty set when it is malformed.
///
/// The failure is logged together with [`LITERAL_HINT`]. Prefer [`parse`]
/// whenever the caller needs to tell an empty literal from a broken one.
///
/// # Example
/// ```
/// use relset::literal::parse_or_empty;
///
/// assert_eq!(parse_or_empty("1, 2").len(), 2);
/// assert!(parse_or_empty("(1, 2").is_empty());
/// ```
#[must_use]
pub fn parse_or_empty(input: &str) -> SetValue {
    parse(input).unwrap_or_else(|e| {
                    warn!(error = %e, "could not parse literal. {LITERAL_HINT}");
                    SetValue::new()
                })
}

/// Splits the input on commas at parenthesis depth zero.
///
/// Returned values are trimmed; empty ones are dropped.
fn split_top_level(input: &str) -> ParseResult<Vec<&str>> {
    let mut lexer = Token::lexer(input);
    let mut open_parens = Vec::new();
    let mut tokens = Vec::new();
    let mut start = 0;

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        // Every character is covered by some token, so the lexer cannot fail.
        match token.unwrap_or(Token::Chunk) {
            Token::LParen => open_parens.push(span.start),
            Token::RParen => {
                if open_parens.pop().is_none() {
                    return Err(ParseError::UnexpectedClosingParen { position: span.start });
                }
            },
            Token::Comma if open_parens.is_empty() => {
                tokens.push(&input[start..span.start]);
                start = span.end;
            },
            Token::Comma | Token::Chunk => {},
        }
    }

    if let Some(&position) = open_parens.first() {
        return Err(ParseError::UnclosedParen { position });
    }
    tokens.push(&input[start..]);

    Ok(tokens.into_iter()
             .map(str::trim)
             .filter(|token| !token.is_empty())
             .collect())
}

/// Parses one top-level value into a tuple or an atom.
fn parse_value(token: &str) -> ParseResult<Element> {
    if let Some(inner) = token.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        let parts = inner.split(',')
                         .map(|part| parse_atom(part).map(Element::Atom))
                         .collect::<ParseResult<Vec<_>>>()?;
        return Ok(Element::Tuple(parts));
    }

    parse_atom(token).map(Element::Atom)
}

fn parse_atom(part: &str) -> ParseResult<Atom> {
    Ok(coerce_atom(unquote(part.trim())?))
}
