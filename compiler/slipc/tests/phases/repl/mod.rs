//! Session and REPL tests.

use pretty_assertions::assert_eq;
use slipc::{apply_signatures, repl, Error, ReplOptions, Session};

fn session() -> Session {
    Session::new(ReplOptions::default())
}

#[test]
fn session_eval_checks_then_runs() {
    let outcome = session().eval("(const \"yolo\" 42)").unwrap();
    assert_eq!(outcome.to_string(), "yolo");
    assert_eq!(outcome.ty.unwrap().show(), "String");
}

#[test]
fn session_reports_type_errors_before_running() {
    let err = session().eval("(if 1 (/ 1 0) 2)").unwrap_err();
    assert!(matches!(err, Error::Type(_)), "{err:?}");
}

#[test]
fn unchecked_session_reports_runtime_errors() {
    let session = Session::new(ReplOptions {
        check: false,
        ..ReplOptions::default()
    });
    let err = session.eval("(if 1 (/ 1 0) 2)").unwrap_err();
    assert_eq!(
        err.to_string(),
        "evaluation error: expected a `Bool` expression, found `Int`"
    );
}

#[test]
fn curried_overloaded_heads_check_and_run() {
    let outcome = session().eval("((==) true false)").unwrap();
    assert_eq!(outcome.to_string(), "false");
    assert_eq!(outcome.ty.unwrap().show(), "Bool");
    assert_eq!(session().eval(r#"((+ "a") "b")"#).unwrap().to_string(), "ab");
}

#[test]
fn session_parse_tree() {
    assert_eq!(
        session().parse_tree("(+ 1 2)").unwrap(),
        "[+:atom 1:int 2:int]"
    );
}

#[test]
fn applying_signatures() {
    assert_eq!(
        apply_signatures("Bool -> a -> a -> a", "Bool").unwrap().show(),
        "forall a. a -> a -> a"
    );
    assert_eq!(
        apply_signatures("a -> a -> a", "Int -> Bool").unwrap().show(),
        "(Int -> Bool) -> Int -> Bool"
    );
    let err = apply_signatures("Bool -> a -> a -> a", "Int").unwrap_err();
    assert!(err.to_string().starts_with("type error: "), "{err}");
}

#[test]
fn full_transcript() {
    let input = "\
(+ 1 2)
(if (== 0 1) 42 666)
(+s \"Werez my \" \"SLIP?\")
:type (const \"yolo\" 42)
:parse (+ 1 2)
(+ 1 2 3)
:quit
";
    let mut output = Vec::new();
    let session = Session::new(ReplOptions {
        prompt: String::new(),
        ..ReplOptions::default()
    });
    repl::run(&session, input.as_bytes(), &mut output).unwrap();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "\
3
666
Werez my SLIP?
String
[+:atom 1:int 2:int]
error: type error: no overload of `+` accepts these arguments: `Int` is not a function type

"
    );
}

#[test]
fn deeply_nested_lines_leave_the_session_usable() {
    let worker = std::thread::Builder::new()
        .stack_size(8 * 1024 * 1024)
        .spawn(|| {
            let depth = 200_000;
            let source = format!("{}true{}", "(not ".repeat(depth), ")".repeat(depth));
            let session = session();
            assert_eq!(session.eval(&source).unwrap().to_string(), "true");
            assert!(session.parse_tree(&source).unwrap().starts_with("[not:atom ["));
            assert_eq!(session.eval("(+ 1 2)").unwrap().to_string(), "3");
        })
        .unwrap();
    worker.join().unwrap();
}
