use ordered_float::OrderedFloat;

use crate::{error::ParseError, literal::parser::ParseResult, value::Atom};

/// Types a trimmed, unquoted value.
///
/// Values containing a decimal point are read as decimals, all others as
/// integers. Whatever fails to parse, including integers that do not fit in
/// an `i64`, is kept as text exactly as typed.
///
/// # Example
/// ```
/// use relset::{literal::coerce::coerce_atom, value::Atom};
///
/// assert_eq!(coerce_atom("42"), Atom::Integer(42));
/// assert_eq!(coerce_atom("2.5"), Atom::from(2.5));
/// assert_eq!(coerce_atom("1.2.3"), Atom::from("1.2.3"));
/// assert_eq!(coerce_atom("New York"), Atom::from("New York"));
/// ```
#[must_use]
pub fn coerce_atom(token: &str) -> Atom {
    if token.contains('.') {
        if let Ok(r) = token.parse::<f64>() {
            return Atom::Float(OrderedFloat(r));
        }
    } else if let Ok(i) = token.parse::<i64>() {
        return Atom::Integer(i);
    }

    Atom::Text(token.to_string())
}

/// Strips one layer of matching quotes from both ends of a value.
///
/// Values that do not start with a quote are returned unchanged, so inner
/// and trailing quotes such as in `it's` are kept.
///
/// # Errors
/// Returns `ParseError::UnterminatedQuote` if the value starts with a quote
/// that does not also end it.
///
/// # Example
/// ```
/// use relset::literal::coerce::unquote;
///
/// assert_eq!(unquote("'a'").unwrap(), "a");
/// assert_eq!(unquote("\"b c\"").unwrap(), "b c");
/// assert_eq!(unquote("it's").unwrap(), "it's");
/// assert!(unquote("'a").is_err());
/// ```
pub fn unquote(part: &str) -> ParseResult<&str> {
    for quote in ['\'', '"'] {
        if let Some(rest) = part.strip_prefix(quote) {
            return rest.strip_suffix(quote)
                       .ok_or_else(|| ParseError::UnterminatedQuote { token: part.to_string() });
        }
    }

    Ok(part)
}
