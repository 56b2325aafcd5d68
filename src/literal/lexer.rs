use logos::Logos;

/// Represents a lexical token of the literal notation.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Any run of characters without a delimiter, whitespace included.
    #[regex(r"[^(),]+")]
    Chunk,
}
