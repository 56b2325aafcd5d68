use relset::{
    error::ParseError,
    literal::{parse, parse_or_empty},
    value::{Atom, Element, SetValue},
};

fn atom(a: impl Into<Atom>) -> Element {
    Element::Atom(a.into())
}

#[test]
fn parses_relation_literal() {
    let r = parse("(1,a), (2,b), (3,c)").unwrap();

    assert_eq!(r,
               SetValue::from_iter([Element::pair(1, "a"),
                                    Element::pair(2, "b"),
                                    Element::pair(3, "c")]));
    assert!(r.is_relation());
}

#[test]
fn parses_bare_atoms_with_coercion() {
    let s = parse("1, 2.5, a, New York, -7, 1.2.3").unwrap();

    assert_eq!(s,
               SetValue::from_iter([atom(1),
                                    atom(2.5),
                                    atom("a"),
                                    atom("New York"),
                                    atom(-7),
                                    atom("1.2.3")]));
}

#[test]
fn integers_and_floats_stay_distinct() {
    let s = parse("1, 1.0").unwrap();

    assert_eq!(s.len(), 2);
    assert!(s.contains(&atom(1)));
    assert!(s.contains(&atom(1.0)));
}

#[test]
fn quotes_are_stripped_once() {
    let s = parse("'a', \"b\", 'it''s', it's").unwrap();

    assert_eq!(s,
               SetValue::from_iter([atom("a"), atom("b"), atom("it''s"), atom("it's")]));
}

#[test]
fn quoted_numbers_are_still_coerced() {
    assert_eq!(parse("'1'").unwrap(), SetValue::from_iter([atom(1)]));
}

#[test]
fn quoted_tuple_parts() {
    let r = parse("('x', \"y z\")").unwrap();

    assert_eq!(r, SetValue::from_iter([Element::pair("x", "y z")]));
}

#[test]
fn duplicates_collapse() {
    assert_eq!(parse("1, 1, (1,a), ( 1 , a )").unwrap().len(), 2);
}

#[test]
fn empty_tokens_are_dropped() {
    assert_eq!(parse("1,, 2 ,  ,").unwrap(), parse("1, 2").unwrap());
    assert!(parse("").unwrap().is_empty());
    assert!(parse("   ").unwrap().is_empty());
    assert!(parse(",,").unwrap().is_empty());
}

#[test]
fn tuples_with_other_arity_are_not_pairs() {
    let s = parse("(1,2,3), (4)").unwrap();

    assert!(s.contains(&Element::Tuple(vec![atom(1), atom(2), atom(3)])));
    assert!(s.contains(&Element::Tuple(vec![atom(4)])));
    assert!(!s.is_relation());
}

#[test]
fn empty_tuple_part_is_empty_text() {
    let s = parse("(1,)").unwrap();

    assert_eq!(s, SetValue::from_iter([Element::pair(1, "")]));
}

#[test]
fn nested_tuples_are_not_supported() {
    let s = parse("((1,2),3)").unwrap();

    assert_eq!(s,
               SetValue::from_iter([Element::Tuple(vec![atom("(1"), atom("2)"), atom(3)])]));
}

#[test]
fn unclosed_paren_is_an_error() {
    assert_eq!(parse("(1,2"), Err(ParseError::UnclosedParen { position: 0 }));
    assert_eq!(parse("(1,a), (2,b"), Err(ParseError::UnclosedParen { position: 7 }));
}

#[test]
fn unexpected_closing_paren_is_an_error() {
    assert_eq!(parse("1)"), Err(ParseError::UnexpectedClosingParen { position: 1 }));
    assert_eq!(parse("(1,2)), 3"),
               Err(ParseError::UnexpectedClosingParen { position: 5 }));
}

#[test]
fn unterminated_quote_is_an_error() {
    assert_eq!(parse("'a, b"),
               Err(ParseError::UnterminatedQuote { token: "'a".to_string() }));
    assert!(parse("(1, \"b)").is_err());
    assert!(parse("'").is_err());
}

#[test]
fn lenient_parse_falls_back_to_empty() {
    assert!(parse_or_empty("(1,2").is_empty());
    assert_eq!(parse_or_empty("(1,2)"), parse("(1,2)").unwrap());
}

#[test]
fn display_is_sorted_and_quotes_ambiguous_text() {
    let s = parse("b, a, 2, 1.0, (1,a)").unwrap();
    assert_eq!(s.to_string(), "{2, 1.0, a, b, (1, a)}");

    let digits = SetValue::from_iter([atom(Atom::Text("1".into())), atom(1)]);
    assert_eq!(digits.to_string(), "{1, '1'}");

    assert_eq!(SetValue::new().to_string(), "{}");
}

#[test]
fn large_integral_floats_keep_their_decimal_point() {
    let s = SetValue::from_iter([atom(1e16), atom(10_000_000_000_000_000_i64)]);

    assert_eq!(s.to_string(), "{10000000000000000, 10000000000000000.0}");
    assert_eq!(parse("10000000000000000.0").unwrap(), SetValue::from_iter([atom(1e16)]));
}
