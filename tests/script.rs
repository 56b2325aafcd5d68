use relset::{
    error::{RegistryError, ScriptError},
    literal::parse,
    run_script,
    session::{
        core::Session,
        operation::{Evaluation, OPERATIONS, Operand, Verdict, lookup},
        outcome::Outcome,
        registry::{Registry, UNIVERSE},
    },
};

fn assert_success(src: &str) {
    if let Err(e) = run_script(src, true) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) -> ScriptError {
    match run_script(src, true) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

fn last_line(src: &str) -> String {
    let outcomes = run_script(src, true).unwrap_or_else(|e| panic!("Script failed: {e}"));
    outcomes.last()
            .map(ToString::to_string)
            .unwrap_or_default()
}

#[test]
fn definitions_and_set_operations() {
    assert_success("X = 1, 2, 3\nY = 3, 4\nlet Z = union(X, Y)\nZ2 = 1, 2, 3, 4\nassert eq(Z, Z2)");
    assert_success("X = 1, 2, 3\nY = 3, 4\nlet Z = intersection(X, Y)\nW = 3\nassert eq(Z, W)");
    assert_success("X = 1, 2, 3\nY = 3, 4\nlet Z = difference(X, Y)\nW = 1, 2\nassert eq(Z, W)");
    assert_success("let Z = complement(U, A)\nassert subset(Z, U)");
}

#[test]
fn names_are_case_insensitive() {
    assert_success("x = 1, 2\nassert eq(X, x)\nshow x");
}

#[test]
fn editing_sets() {
    assert_eq!(last_line("X = 1, 2\nX += 3, 4"), "X = {1, 2, 3, 4}");
    assert_eq!(last_line("X = 1, 2, 3\nX -= 2"), "X = {1, 3}");
    assert!(matches!(assert_failure("NOPE += 1"),
                     ScriptError::Registry { source: RegistryError::UndefinedBinding { .. },
                                             line:   1, }));
}

#[test]
fn evaluation_labels_and_values() {
    assert_eq!(last_line("union(C2, D)"), "union(C2, D) = {1, 2, 3}");
    assert_eq!(last_line("bin(E, C2, B2)"), "bin(E, C2, B2) = true");
    assert_eq!(last_line("compose(R, E)"),
               "compose(R, E) = {(1, a), (a, a), (b, a)}");
    assert_eq!(last_line("let R3 = pow(R, 3)\nassert eq(R3, R)\nsim(r3, a2)"),
               "sim(R3, A2) = true");
}

#[test]
fn project_presets() {
    assert_success("assert bin(E, C2, B2)\nassert ref(R, A2)\nassert sim(R, A2)\nassert tra(R, A2)");
    assert_success("assert fun(E, C2, B2)");
    assert_success("let P = product(A, B)\nassert bin(P, A, B)");
    assert_eq!(last_line("let P = product(A, B)\nfun(P, A, B)").split(" (").next(),
               Some("fun(P, A, B) = false"));
    assert_eq!(last_line("difference(D, U)"), "difference(D, U) = {}");
}

#[test]
fn diagnostics_explain_false_verdicts() {
    assert_eq!(last_line("S = (1,1), (2,2)\nT = 1, 2, 3\nref(S, T)"),
               "ref(S, T) = false (missing pairs: (3, 3))");
    assert_eq!(last_line("S = (1,2), (2,3)\nT = 1, 2, 3\nsim(S, T)"),
               "sim(S, T) = false ((1, 2) is in the relation but (2, 1) is not)");
    assert_eq!(last_line("S = (1,2), (2,3)\nT = 1, 2, 3\ntra(S, T)"),
               "tra(S, T) = false ((1, 2) and (2, 3) are in the relation but (1, 3) is not)");
    assert_eq!(last_line("F = (1,a), (1,b)\nfun(F, C2, B2)"),
               "fun(F, C2, B2) = false (element 1 has multiple images: a and b)");
}

#[test]
fn assertion_failures_carry_the_reason() {
    let err = assert_failure("S = (1,1)\nT = 1, 2\nassert ref(S, T)");

    assert!(matches!(&err,
                     ScriptError::AssertionFailed { reason: Some(reason), line: 3 }
                     if reason == "missing pairs: (2, 2)"));
}

#[test]
fn assert_requires_a_verdict() {
    assert!(matches!(assert_failure("assert union(A, B)"),
                     ScriptError::ExpectedVerdict { line: 1 }));
    assert!(matches!(assert_failure("let X = ref(R, A2)"),
                     ScriptError::ExpectedSet { line: 1 }));
}

#[test]
fn operation_errors() {
    assert!(matches!(assert_failure("frobnicate(A)"),
                     ScriptError::UnknownOperation { line: 1, .. }));
    assert!(matches!(assert_failure("union(A)"),
                     ScriptError::ArgumentCountMismatch { expected: 2,
                                                          found: 1,
                                                          .. }));
    assert!(matches!(assert_failure("pow(R, A)"), ScriptError::ExpectedInteger { .. }));
    assert!(matches!(assert_failure("union(A, 3)"), ScriptError::ExpectedSet { .. }));
    assert!(matches!(assert_failure("pow(R, 0)"), ScriptError::Algebra { .. }));
    assert!(matches!(assert_failure("ref(A, A)"), ScriptError::Algebra { .. }));
    assert!(matches!(assert_failure("union(A, NOPE)"), ScriptError::Registry { .. }));
}

#[test]
fn malformed_commands() {
    assert!(matches!(assert_failure("union(A, B"), ScriptError::MalformedCommand { .. }));
    assert!(matches!(assert_failure("A"), ScriptError::MalformedCommand { .. }));
    assert!(matches!(assert_failure("let = union(A, B)"),
                     ScriptError::MalformedCommand { .. }));
    assert!(matches!(assert_failure("union(A, B) extra"),
                     ScriptError::MalformedCommand { .. }));
    assert!(matches!(assert_failure("show A B"), ScriptError::MalformedCommand { .. }));
}

#[test]
fn broken_literals_are_reported_with_their_line() {
    let err = assert_failure("X = 1, 2\nY = (1, 2");

    assert!(matches!(err, ScriptError::Literal { line: 2, .. }));
    assert!(err.to_string().contains("(1,a), (2,b), (3,c)"));
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    let outcomes = run_script("// nothing here\n\n   \nunion(C2, C2) // trailing", true).unwrap();

    assert_eq!(outcomes.len(), 1);
}

#[test]
fn double_slashes_inside_literals_are_kept() {
    assert_eq!(last_line("X = http://example.org, b"), "X = {b, http://example.org}");
    assert_eq!(last_line("X = 'a//b'"), "X = {a//b}");
    assert_eq!(last_line("X = 1, 2 // two values"), "X = {1, 2}");
    assert_eq!(last_line("X = 1\nX += 2 // nothing else"), "X = {1, 2}");
    assert_eq!(last_line("X = // empty"), "X = {}");
}

#[test]
fn deleting_sets() {
    assert_eq!(last_line("del A"), "Deleted A");
    assert!(matches!(assert_failure("del A\nshow A"),
                     ScriptError::Registry { line: 2, .. }));
    assert!(matches!(assert_failure("del U"),
                     ScriptError::Registry { source: RegistryError::ProtectedBinding { .. },
                                             .. }));
    assert!(matches!(assert_failure("del NOPE"),
                     ScriptError::Registry { source: RegistryError::UndefinedBinding { .. },
                                             .. }));
}

#[test]
fn show_lists_in_insertion_order() {
    let outcomes = run_script("show", true).unwrap();
    let Outcome::Listing(bindings) = &outcomes[0] else {
        panic!("Expected a listing");
    };
    let names: Vec<_> = bindings.iter().map(|(name, _)| name.as_str()).collect();

    assert_eq!(names, ["U", "A", "B", "C", "D", "E", "A2", "B2", "C2", "R"]);
    assert_eq!(run_script("show", false).unwrap()[0].to_string(), "No sets defined");
}

#[test]
fn session_keeps_bindings_between_runs() {
    let mut session = Session::new(Registry::new());
    session.run("X = (1,2), (2,3)").unwrap();
    let outcomes = session.run("let Y = compose(X, X)").unwrap();

    assert_eq!(outcomes,
               vec![Outcome::Bound { name: "Y".to_string(),
                                     set:  parse("(1,3)").unwrap(), }]);
    assert_eq!(session.registry().get("y").unwrap(), &parse("(1,3)").unwrap());
}

#[test]
fn failed_line_keeps_earlier_bindings() {
    let mut session = Session::new(Registry::new());
    assert!(session.run("X = 1\nunion(X, NOPE)\nY = 2").is_err());

    let registry = session.into_registry();
    assert!(registry.contains("X"));
    assert!(!registry.contains("Y"));
}

#[test]
fn registry_contract() {
    let mut registry = Registry::new();

    assert!(matches!(registry.get("A"), Err(RegistryError::UndefinedBinding { .. })));
    assert_eq!(registry.put(" a ", parse("1").unwrap()), None);
    assert_eq!(registry.put("A", parse("2").unwrap()), Some(parse("1").unwrap()));
    assert_eq!(registry.get("a").unwrap(), &parse("2").unwrap());

    registry.put(UNIVERSE, parse("1, 2").unwrap());
    assert_eq!(registry.delete("u"),
               Err(RegistryError::ProtectedBinding { name: "U".to_string() }));
    assert_eq!(registry.delete("a"), Ok(parse("2").unwrap()));
    assert_eq!(registry.names().collect::<Vec<_>>(), ["U"]);
    assert_eq!(registry.len(), 1);
}

#[test]
fn operation_table_is_complete() {
    for name in ["union", "intersection", "difference", "complement", "product", "eq", "subset",
                 "bin", "ref", "sim", "tra", "fun", "compose", "pow"]
    {
        assert!(OPERATIONS.contains(&name), "missing operation {name}");
        assert!(lookup(name).is_some());
    }

    let eq = lookup("eq").unwrap();
    assert_eq!(eq.arity, 2);

    let a = parse("1").unwrap();
    let result = eq.call(&[Operand::Set(&a), Operand::Set(&a)], 1).unwrap();
    assert_eq!(result,
               Evaluation::Verdict(Verdict { holds:  true,
                                             reason: None, }));
}
