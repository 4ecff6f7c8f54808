//! Reader phase tests.

use pretty_assertions::assert_eq;
use slip_ir::Value;
use slip_parse::{parse, parse_all, parse_signature, parse_type, ParseError, Span};
use slip_types::Type;

fn tagged(source: &str) -> String {
    parse(source).unwrap().tagged().to_string()
}

#[test]
fn addition_prints_tagged() {
    assert_eq!(tagged("(+ 1 2)"), "[+:atom 1:int 2:int]");
}

#[test]
fn mixed_literals() {
    assert_eq!(
        tagged("(f \"a b\" true -3 x ())"),
        "[f:atom \"a b\":str true:bool -3:int x:atom []]"
    );
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(parse("( +\n\t1   2 )").unwrap(), parse("(+ 1 2)").unwrap());
}

#[test]
fn nested_calls() {
    assert_eq!(
        parse("(if (== 1 1) 42 666)").unwrap(),
        Value::call(
            "if",
            [
                Value::call("==", [Value::int(1), Value::int(1)]),
                Value::int(42),
                Value::int(666),
            ]
        )
    );
}

#[test]
fn program_of_several_expressions() {
    let exprs = parse_all("(+ 1 2)\n(not true)\n\"done\"").unwrap();
    assert_eq!(exprs.len(), 3);
    assert_eq!(exprs[2], Value::string("done"));
    assert_eq!(parse_all("  \n ").unwrap(), Vec::new());
}

#[test]
fn errors_point_at_the_problem() {
    let err = parse("(+ 1 2").unwrap_err();
    assert!(matches!(err, ParseError::UnclosedList { .. }), "{err:?}");
    assert_eq!(err.span(), Span::new(0, 1));

    let err = parse("(+ 1 2))").unwrap_err();
    assert_eq!(err.span(), Span::new(7, 8));

    assert!(matches!(
        parse("").unwrap_err(),
        ParseError::EmptyInput { .. }
    ));
    assert!(matches!(
        parse("(+s \"open").unwrap_err(),
        ParseError::UnterminatedString { .. }
    ));
}

#[test]
fn signatures() {
    assert_eq!(
        parse_type("(Int -> Bool) -> Int -> Bool").unwrap(),
        Type::function(
            [Type::arrow(Type::int(), Type::bool()), Type::int()],
            Type::bool()
        )
    );
    assert_eq!(
        parse_signature("Bool -> b -> b -> b").unwrap().show(),
        "forall a. Bool -> a -> a -> a"
    );
}
