use tracing::debug;

use crate::{
    algebra::{difference, union},
    error::ScriptError,
    literal::parse,
    session::{
        command::{Argument, Call, Command, DefineMode, ScriptResult, parse_command},
        operation::{Evaluation, Operand, Verdict, lookup},
        outcome::Outcome,
        registry::Registry,
    },
    value::SetValue,
};

/// Executes script commands against a registry of named sets.
///
/// The session owns its registry for its whole lifetime. Names in commands
/// are resolved here, and only the resolved sets reach the algebra.
///
/// ## Usage
///
/// A `Session` is created once and reused for every line of a script, so
/// bindings made on one line are visible on the next.
#[derive(Debug, Default)]
pub struct Session {
    registry: Registry,
}

impl Session {
    /// Creates a session over the given registry.
    #[must_use]
    pub const fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Returns the registry.
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Ends the session and hands back its registry.
    #[must_use]
    pub fn into_registry(self) -> Registry {
        self.registry
    }

    /// Executes every line of `source` and collects the outcomes.
    ///
    /// Execution stops at the first failing line; bindings made by earlier
    /// lines are kept.
    ///
    /// # Example
    /// ```
    /// use relset::session::{core::Session, registry::Registry};
    ///
    /// let mut session = Session::new(Registry::new());
    /// let outcomes = session.run("R = (1,2), (2,3)\npow(R, 2)").unwrap();
    ///
    /// assert_eq!(outcomes[1].to_string(), "pow(R, 2) = {(1, 3)}");
    /// ```
    pub fn run(&mut self, source: &str) -> ScriptResult<Vec<Outcome>> {
        let mut outcomes = Vec::new();

        for (i, line) in source.lines().enumerate() {
            if let Some(outcome) = self.execute_line(line, i + 1)? {
                outcomes.push(outcome);
            }
        }

        Ok(outcomes)
    }

    /// Executes a single line.
    ///
    /// Returns `None` for blank lines, comments and passing assertions.
    pub fn execute_line(&mut self, line: &str, number: usize) -> ScriptResult<Option<Outcome>> {
        let Some(command) = parse_command(line, number)? else {
            return Ok(None);
        };
        debug!(line = number, ?command, "executing command");

        match command {
            Command::Define { name, mode, literal } => {
                let parsed =
                    parse(&literal).map_err(|source| ScriptError::Literal { source,
                                                                            line: number })?;
                let set = match mode {
                    DefineMode::Replace => parsed,
                    DefineMode::Extend => union(self.lookup(&name, number)?, &parsed),
                    DefineMode::Remove => difference(self.lookup(&name, number)?, &parsed),
                };
                Ok(Some(self.bind(&name, set)))
            },
            Command::Bind { name, call } => match self.evaluate(&call, number)? {
                Evaluation::Set(set) => Ok(Some(self.bind(&name, set))),
                Evaluation::Verdict(_) => Err(ScriptError::ExpectedSet { line: number }),
            },
            Command::Evaluate(call) => {
                let evaluation = self.evaluate(&call, number)?;
                Ok(Some(Outcome::Evaluated { label: call.to_string(),
                                             evaluation }))
            },
            Command::Assert(call) => match self.evaluate(&call, number)? {
                Evaluation::Verdict(Verdict { holds: true, .. }) => Ok(None),
                Evaluation::Verdict(Verdict { reason, .. }) => {
                    Err(ScriptError::AssertionFailed { reason,
                                                       line: number })
                },
                Evaluation::Set(_) => Err(ScriptError::ExpectedVerdict { line: number }),
            },
            Command::Delete(name) => {
                self.registry
                    .delete(&name)
                    .map_err(|source| ScriptError::Registry { source,
                                                              line: number })?;
                Ok(Some(Outcome::Deleted { name: Registry::normalize(&name) }))
            },
            Command::Show(Some(name)) => {
                let set = self.lookup(&name, number)?.clone();
                Ok(Some(Outcome::Listing(vec![(Registry::normalize(&name), set)])))
            },
            Command::Show(None) => {
                let bindings = self.registry
                                   .iter()
                                   .map(|(name, set)| (name.to_string(), set.clone()))
                                   .collect();
                Ok(Some(Outcome::Listing(bindings)))
            },
        }
    }

    /// Resolves the arguments of a call and runs its operation.
    fn evaluate(&self, call: &Call, number: usize) -> ScriptResult<Evaluation> {
        let Some(operation) = lookup(&call.operation) else {
            return Err(ScriptError::UnknownOperation { name: call.operation.clone(),
                                                       line: number, });
        };
        if call.arguments.len() != operation.arity {
            return Err(ScriptError::ArgumentCountMismatch { name:     call.operation.clone(),
                                                            expected: operation.arity,
                                                            found:    call.arguments.len(),
                                                            line:     number, });
        }

        let operands = call.arguments
                           .iter()
                           .map(|argument| match argument {
                               Argument::Name(name) => self.lookup(name, number).map(Operand::Set),
                               Argument::Integer(n) => Ok(Operand::Integer(*n)),
                           })
                           .collect::<ScriptResult<Vec<_>>>()?;

        operation.call(&operands, number)
    }

    fn lookup(&self, name: &str, number: usize) -> ScriptResult<&SetValue> {
        self.registry
            .get(name)
            .map_err(|source| ScriptError::Registry { source,
                                                      line: number })
    }

    fn bind(&mut self, name: &str, set: SetValue) -> Outcome {
        self.registry.put(name, set.clone());
        Outcome::Bound { name: Registry::normalize(name),
                         set }
    }
}
