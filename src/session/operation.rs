use std::fmt::Display;

use crate::{
    algebra::{self, AlgebraResult},
    error::ScriptError,
    session::command::ScriptResult,
    value::SetValue,
};

/// A resolved operation argument.
#[derive(Clone, Copy, Debug)]
pub enum Operand<'a> {
    /// A set looked up in the registry.
    Set(&'a SetValue),
    /// An integer literal.
    Integer(i64),
}

impl<'a> Operand<'a> {
    /// Returns the set, or an error if the operand is an integer.
    pub const fn as_set(&self, line: usize) -> ScriptResult<&'a SetValue> {
        match *self {
            Self::Set(set) => Ok(set),
            Self::Integer(_) => Err(ScriptError::ExpectedSet { line }),
        }
    }

    /// Returns the integer, or an error if the operand is a set.
    pub const fn as_integer(&self, line: usize) -> ScriptResult<i64> {
        match *self {
            Self::Integer(n) => Ok(n),
            Self::Set(_) => Err(ScriptError::ExpectedInteger { line }),
        }
    }
}

/// The result of a predicate, with an explanation when it is false.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the predicate holds.
    pub holds:  bool,
    /// Why it does not hold, if known.
    pub reason: Option<String>,
}

impl Verdict {
    fn from_reason(reason: Option<String>) -> Self {
        Self { holds: reason.is_none(),
               reason }
    }
}

/// What evaluating an operation produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Evaluation {
    /// A set, from a set operation, a composition or a power.
    Set(SetValue),
    /// A true/false answer, from a predicate.
    Verdict(Verdict),
}

impl Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Set(set) => write!(f, "{set}"),
            Self::Verdict(Verdict { holds, reason: Some(reason) }) => {
                write!(f, "{holds} ({reason})")
            },
            Self::Verdict(Verdict { holds, reason: None }) => write!(f, "{holds}"),
        }
    }
}

/// Type alias for operation handlers.
///
/// A handler receives its resolved operands, already checked against the
/// operation's arity, and the line number for error reporting.
type OperationFn = fn(&[Operand<'_>], usize) -> ScriptResult<Evaluation>;

/// Defines the script operations by generating a lookup table and a name
/// list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments,
/// - a function pointer implementing the operation.
macro_rules! operations {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// Metadata of one script operation.
        pub struct OperationDef {
            /// The name the operation is called by.
            pub name:  &'static str,
            /// The number of arguments it takes.
            pub arity: usize,
            func:      OperationFn,
        }
        static OPERATION_TABLE: &[OperationDef] = &[
            $(
                OperationDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// The names of all script operations.
        pub const OPERATIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

operations! {
    "union"        => { arity: 2, func: union },
    "intersection" => { arity: 2, func: intersection },
    "difference"   => { arity: 2, func: difference },
    "complement"   => { arity: 2, func: complement },
    "product"      => { arity: 2, func: product },
    "eq"           => { arity: 2, func: equals },
    "subset"       => { arity: 2, func: subset },
    "bin"          => { arity: 3, func: binary_relation },
    "ref"          => { arity: 2, func: reflexive },
    "sim"          => { arity: 2, func: symmetric },
    "tra"          => { arity: 2, func: transitive },
    "fun"          => { arity: 3, func: function },
    "compose"      => { arity: 2, func: compose },
    "pow"          => { arity: 2, func: power },
}

/// Finds an operation by name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static OperationDef> {
    OPERATION_TABLE.iter().find(|op| op.name == name)
}

impl OperationDef {
    /// Runs the operation on operands whose count matches its arity.
    pub fn call(&self, args: &[Operand<'_>], line: usize) -> ScriptResult<Evaluation> {
        (self.func)(args, line)
    }
}

/// Attaches the line number to an algebra error.
fn at_line<T>(result: AlgebraResult<T>, line: usize) -> ScriptResult<T> {
    result.map_err(|source| ScriptError::Algebra { source, line })
}

fn set_op(args: &[Operand<'_>],
          line: usize,
          op: fn(&SetValue, &SetValue) -> SetValue)
          -> ScriptResult<Evaluation> {
    Ok(Evaluation::Set(op(args[0].as_set(line)?, args[1].as_set(line)?)))
}

fn set_test(args: &[Operand<'_>],
            line: usize,
            test: fn(&SetValue, &SetValue) -> bool)
            -> ScriptResult<Evaluation> {
    Ok(Evaluation::Verdict(Verdict { holds:  test(args[0].as_set(line)?, args[1].as_set(line)?),
                                     reason: None, }))
}

fn union(args: &[Operand<'_>], line: usize) -> ScriptResult<Evaluation> {
    set_op(args, line, algebra::union)
}

fn intersection(args: &[Operand<'_>], line: usize) -> ScriptResult<Evaluation> {
    set_op(args, line, algebra::intersection)
}

fn difference(args: &[Operand<'_>], line: usize) -> ScriptResult<Evaluation> {
    set_op(args, line, algebra::difference)
}

fn complement(args: &[Operand<'_>], line: usize) -> ScriptResult<Evaluation> {
    set_op(args, line, algebra::complement)
}

fn product(args: &[Operand<'_>], line: usize) -> ScriptResult<Evaluation> {
    set_op(args, line, algebra::cartesian_product)
}

fn equals(args: &[Operand<'_>], line: usize) -> ScriptResult<Evaluation> {
    set_test(args, line, algebra::equals)
}

fn subset(args: &[Operand<'_>], line: usize) -> ScriptResult<Evaluation> {
    set_test(args, line, algebra::is_subset)
}

fn binary_relation(args: &[Operand<'_>], line: usize) -> ScriptResult<Evaluation> {
    let holds = at_line(algebra::is_binary_relation(args[0].as_set(line)?,
                                                    args[1].as_set(line)?,
                                                    args[2].as_set(line)?),
                        line)?;

    Ok(Evaluation::Verdict(Verdict { holds,
                                     reason: None }))
}

fn reflexive(args: &[Operand<'_>], line: usize) -> ScriptResult<Evaluation> {
    let gaps = at_line(algebra::reflexivity_gaps(args[0].as_set(line)?, args[1].as_set(line)?),
                       line)?;

    let reason = (!gaps.is_empty()).then(|| {
                                       let missing = gaps.iter()
                                                         .map(|x| format!("({x}, {x})"))
                                                         .collect::<Vec<_>>()
                                                         .join(", ");
                                       format!("missing pairs: {missing}")
                                   });

    Ok(Evaluation::Verdict(Verdict::from_reason(reason)))
}

fn symmetric(args: &[Operand<'_>], line: usize) -> ScriptResult<Evaluation> {
    let counterexample =
        at_line(algebra::symmetry_counterexample(args[0].as_set(line)?, args[1].as_set(line)?),
                line)?;

    let reason = counterexample.map(|pair| {
                                   format!("{pair} is in the relation but {} is not",
                                           pair.mirrored())
                               });

    Ok(Evaluation::Verdict(Verdict::from_reason(reason)))
}

fn transitive(args: &[Operand<'_>], line: usize) -> ScriptResult<Evaluation> {
    let witness =
        at_line(algebra::transitivity_counterexample(args[0].as_set(line)?,
                                                     args[1].as_set(line)?),
                line)?;

    Ok(Evaluation::Verdict(Verdict::from_reason(witness.map(|w| w.to_string()))))
}

fn function(args: &[Operand<'_>], line: usize) -> ScriptResult<Evaluation> {
    let violation = at_line(algebra::function_violation(args[0].as_set(line)?,
                                                        args[1].as_set(line)?,
                                                        args[2].as_set(line)?),
                            line)?;

    Ok(Evaluation::Verdict(Verdict::from_reason(violation.map(|v| v.to_string()))))
}

fn compose(args: &[Operand<'_>], line: usize) -> ScriptResult<Evaluation> {
    at_line(algebra::compose(args[0].as_set(line)?, args[1].as_set(line)?), line).map(Evaluation::Set)
}

fn power(args: &[Operand<'_>], line: usize) -> ScriptResult<Evaluation> {
    at_line(algebra::power(args[0].as_set(line)?, args[1].as_integer(line)?), line).map(Evaluation::Set)
}
