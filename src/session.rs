/// The session module runs scripts of set and relation commands.
///
/// A session owns a registry of named sets and executes one command per
/// line: defining and editing sets from literals, evaluating operations by
/// name, asserting verdicts and listing bindings.
///
/// # Responsibilities
/// - Keeps named sets for the lifetime of a session, with `U` protected.
/// - Resolves names before calling into the algebra, which never sees them.
/// - Reports every failure with the line it occurred on.
pub mod core;
/// Script command lexing and parsing.
pub mod command;
/// The table of operations a script can call.
pub mod operation;
/// Reports produced by executed commands.
pub mod outcome;
/// The named-binding store.
///
/// Defines `Registry`, which maps case-insensitive names to sets and can be
/// seeded with the preset sets.
pub mod registry;
