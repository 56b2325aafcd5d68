use std::{fmt::Display, iter::Peekable};

use logos::Logos;

use crate::{error::ScriptError, session::registry::Registry};

/// Result type used by the script layer.
pub type ScriptResult<T> = Result<T, ScriptError>;

/// Represents a lexical token of a script command.
///
/// Only the command itself is tokenized. The literal after `=`, `+=` or
/// `-=` in a definition is handed to the literal parser untouched.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// `let`
    #[token("let")]
    Let,
    /// `del`
    #[token("del")]
    Del,
    /// `show`
    #[token("show")]
    Show,
    /// `assert`
    #[token("assert")]
    Assert,
    /// Set and operation names such as `A2` or `union`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer arguments such as `3`.
    #[regex(r"-?[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Integer(i64),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// Spaces, tabs and `//` comments.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    #[regex(r"//[^\n]*", logos::skip)]
    Ignored,
}

/// How a definition changes the binding it names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefineMode {
    /// `NAME = literal` replaces the set.
    Replace,
    /// `NAME += literal` adds the elements to the existing set.
    Extend,
    /// `NAME -= literal` removes the elements from the existing set.
    Remove,
}

/// An operation argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Argument {
    /// The name of a bound set.
    Name(String),
    /// An integer, such as the exponent of `pow`.
    Integer(i64),
}

/// A call such as `fun(E, C2, B2)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Call {
    /// The operation name.
    pub operation: String,
    /// The arguments, in order.
    pub arguments: Vec<Argument>,
}

impl Display for Call {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.operation)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match argument {
                Argument::Name(name) => write!(f, "{}", Registry::normalize(name))?,
                Argument::Integer(n) => write!(f, "{n}")?,
            }
        }
        write!(f, ")")
    }
}

/// A single script command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `NAME = literal`, `NAME += literal` or `NAME -= literal`.
    Define {
        /// The binding to change.
        name:    String,
        /// How the binding changes.
        mode:    DefineMode,
        /// The unparsed literal.
        literal: String,
    },
    /// `let NAME = op(args)`.
    Bind {
        /// The binding to create or replace.
        name: String,
        /// The operation whose set is bound.
        call: Call,
    },
    /// `op(args)`.
    Evaluate(Call),
    /// `assert op(args)`.
    Assert(Call),
    /// `del NAME`.
    Delete(String),
    /// `show` or `show NAME`.
    Show(Option<String>),
}

/// Parses one script line into a command.
///
/// Everything after `//` is a comment. Inside the literal of a definition a
/// comment has to start the literal or follow whitespace, so values such as
/// `http://example.org` are kept whole. Lines that are blank once the
/// comment is removed yield `None`.
///
/// Grammar:
/// ```text
/// command := NAME ("=" | "+=" | "-=") literal
///          | "let" NAME "=" call
///          | "assert" call
///          | "del" NAME
///          | "show" NAME?
///          | call
/// call    := NAME "(" (argument ("," argument)*)? ")"
/// ```
///
/// # Errors
/// Returns `ScriptError::MalformedCommand` if the line does not follow the
/// grammar.
///
/// # Example
/// ```
/// use relset::session::command::{Argument, Call, Command, parse_command};
///
/// let command = parse_command("pow(R, 3) // cube", 1).unwrap();
///
/// assert_eq!(command,
///            Some(Command::Evaluate(Call { operation: "pow".to_string(),
///                                          arguments: vec![Argument::Name("R".to_string()),
///                                                          Argument::Integer(3)], })));
/// ```
pub fn parse_command(line: &str, number: usize) -> ScriptResult<Option<Command>> {
    let (tokens, literal) = tokenize(line, number)?;
    let mut tokens = tokens.iter().peekable();

    let command = match tokens.next() {
        Some(Token::Identifier(name)) => match (tokens.next(), literal) {
            (Some(assign), Some(literal)) => {
                let mode = match assign {
                    Token::PlusAssign => DefineMode::Extend,
                    Token::MinusAssign => DefineMode::Remove,
                    _ => DefineMode::Replace,
                };
                Command::Define { name: name.clone(),
                                  mode,
                                  literal: strip_literal_comment(literal).to_string() }
            },
            (Some(Token::LParen), None) => {
                Command::Evaluate(parse_call_arguments(name, &mut tokens, number)?)
            },
            _ => return Err(malformed("expected '=', '+=', '-=' or '(' after a name", number)),
        },
        Some(Token::Let) => {
            let name = expect_name(&mut tokens, number)?;
            if tokens.next() != Some(&Token::Equals) {
                return Err(malformed("expected '=' after 'let NAME'", number));
            }
            Command::Bind { name,
                            call: parse_call(&mut tokens, number)? }
        },
        Some(Token::Assert) => Command::Assert(parse_call(&mut tokens, number)?),
        Some(Token::Del) => Command::Delete(expect_name(&mut tokens, number)?),
        Some(Token::Show) => match tokens.next() {
            Some(Token::Identifier(name)) => Command::Show(Some(name.clone())),
            None => Command::Show(None),
            Some(tok) => return Err(malformed(&format!("expected a set name, found {tok:?}"), number)),
        },
        Some(tok) => return Err(malformed(&format!("unexpected {tok:?}"), number)),
        None => return Ok(None),
    };

    if let Some(tok) = tokens.next() {
        return Err(malformed(&format!("unexpected trailing {tok:?}"), number));
    }

    Ok(Some(command))
}

/// Tokenizes a command line.
///
/// Lexing stops right after the assignment operator of a definition, and
/// the rest of the line is returned as the literal.
fn tokenize(line: &str, number: usize) -> ScriptResult<(Vec<Token>, Option<&str>)> {
    let mut lexer = Token::lexer(line);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        let Ok(token) = token else {
            return Err(malformed(&format!("unexpected '{}'", lexer.slice()), number));
        };
        let is_assignment = matches!(token,
                                     Token::Equals | Token::PlusAssign | Token::MinusAssign);
        tokens.push(token);

        if is_assignment && tokens.len() == 2 && matches!(tokens[0], Token::Identifier(_)) {
            return Ok((tokens, Some(lexer.remainder())));
        }
    }

    Ok((tokens, None))
}

/// Cuts a trailing comment off a literal. Only a `//` at the start of the
/// literal or after whitespace opens a comment.
fn strip_literal_comment(literal: &str) -> &str {
    literal.match_indices("//")
           .find(|&(i, _)| i == 0 || literal[..i].ends_with(char::is_whitespace))
           .map_or(literal, |(i, _)| &literal[..i])
}

/// Parses `NAME "(" arguments ")"`.
fn parse_call<'a, I>(tokens: &mut Peekable<I>, number: usize) -> ScriptResult<Call>
    where I: Iterator<Item = &'a Token>
{
    let operation = expect_name(tokens, number)?;
    if tokens.next() != Some(&Token::LParen) {
        return Err(malformed(&format!("expected '(' after '{operation}'"), number));
    }

    parse_call_arguments(&operation, tokens, number)
}

/// Parses a comma-separated argument list up to and including the closing
/// `)`. An immediately encountered `)` produces an empty list.
fn parse_call_arguments<'a, I>(operation: &str,
                               tokens: &mut Peekable<I>,
                               number: usize)
                               -> ScriptResult<Call>
    where I: Iterator<Item = &'a Token>
{
    let mut arguments = Vec::new();
    if tokens.peek() == Some(&&Token::RParen) {
        tokens.next();

        return Ok(Call { operation: operation.to_string(),
                         arguments });
    }

    loop {
        match tokens.next() {
            Some(Token::Identifier(name)) => arguments.push(Argument::Name(name.clone())),
            Some(Token::Integer(n)) => arguments.push(Argument::Integer(*n)),
            Some(tok) => {
                return Err(malformed(&format!("expected a set name or an integer, found {tok:?}"),
                                     number));
            },
            None => return Err(malformed("unexpected end of line", number)),
        }
        match tokens.next() {
            Some(Token::Comma) => {},
            Some(Token::RParen) => break,
            Some(tok) => return Err(malformed(&format!("expected ',' or ')', found {tok:?}"), number)),
            None => return Err(malformed("expected ')' before the end of line", number)),
        }
    }

    Ok(Call { operation: operation.to_string(),
              arguments })
}

fn expect_name<'a, I>(tokens: &mut Peekable<I>, number: usize) -> ScriptResult<String>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token::Identifier(name)) => Ok(name.clone()),
        Some(tok) => Err(malformed(&format!("expected a name, found {tok:?}"), number)),
        None => Err(malformed("expected a name before the end of line", number)),
    }
}

fn malformed(details: &str, line: usize) -> ScriptError {
    ScriptError::MalformedCommand { details: details.to_string(),
                                    line }
}
