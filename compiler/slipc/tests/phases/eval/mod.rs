//! Evaluation phase tests.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use slip_eval::{Closure, ClosureState, Dynamic, EvalError, Interpreter, Registry};
use slip_ir::Value;
use slip_types::Type;

use crate::common::{eval_ok, eval_source};

#[test]
fn addition() {
    assert_eq!(eval_ok("(+ 1 2)"), Dynamic::Int(3));
}

#[test]
fn if_picks_a_branch() {
    assert_eq!(eval_ok("(if (== 1 1) 42 666)"), Dynamic::Int(42));
    assert_eq!(eval_ok("(if (== 0 1) 42 666)"), Dynamic::Int(666));
}

#[test]
fn if_leaves_the_other_branch_alone() {
    assert_eq!(eval_ok("(if (== 1 1) 42 (/ 1 0))"), Dynamic::Int(42));
    assert_eq!(eval_ok("(if false (nope) \"ok\")"), Dynamic::from("ok"));
    assert_eq!(
        eval_source("(if true (/ 1 0) 0)").unwrap_err(),
        EvalError::DivisionByZero
    );
}

#[test]
fn string_concatenation() {
    assert_eq!(
        eval_ok("(+s \"Werez my \" \"SLIP?\")"),
        Dynamic::from("Werez my SLIP?")
    );
    assert_eq!(eval_ok("(+ \"ab\" \"cd\")").to_string(), "abcd");
}

#[test]
fn const_returns_its_first_argument() {
    let value = eval_ok("(const \"yolo\" 42)");
    assert_eq!(value, Dynamic::from("yolo"));
    assert_eq!(value.to_string(), "yolo");
}

#[test]
fn nested_arithmetic() {
    assert_eq!(eval_ok("(* (+ 1 2) (- 10 (% 7 4)))"), Dynamic::Int(21));
    assert_eq!(eval_ok("((+ 40) 2)"), Dynamic::Int(42));
}

#[test]
fn runtime_errors() {
    assert_eq!(
        eval_source("(nope 1)").unwrap_err(),
        EvalError::UnknownFunction {
            name: "nope".to_owned()
        }
    );
    assert!(matches!(
        eval_source("(* 9223372036854775807 2)").unwrap_err(),
        EvalError::IntegerOverflow { operation: "*" }
    ));
    assert!(matches!(
        eval_source("(not 1)").unwrap_err(),
        EvalError::TypeMismatch { .. }
    ));
    assert!(matches!(
        eval_source("(1 2)").unwrap_err(),
        EvalError::NotAFunction { .. }
    ));
}

fn arg_for(param: &Type) -> Value {
    match param.const_name() {
        Some("Bool") => Value::bool(true),
        Some("String") => Value::string("s"),
        _ => Value::int(1),
    }
}

#[test]
fn underfilled_closures_fail_for_every_builtin() {
    let registry = Registry::with_builtins();
    let interpreter = Interpreter::new(&registry);
    let args: Vec<Vec<Value>> = registry
        .iter()
        .map(|function| {
            function
                .signature()
                .ty()
                .params()
                .into_iter()
                .map(arg_for)
                .collect()
        })
        .collect();

    for (function, args) in registry.iter().zip(&args) {
        let arity = function.arity();
        for filled in 0..arity {
            let mut closure = Closure::new(function);
            for arg in &args[..filled] {
                closure.apply(arg, &interpreter).unwrap();
            }
            assert_eq!(closure.state(), ClosureState::Unfilled { filled });
            assert!(
                matches!(closure.result(), Err(EvalError::ArityMismatch { .. })),
                "{} with {filled} arguments",
                function.key()
            );
        }
    }
}

#[test]
fn one_argument_too_many_fails_for_every_builtin() {
    let registry = Registry::with_builtins();
    let interpreter = Interpreter::new(&registry);
    let extra = Value::int(0);
    let args: Vec<Vec<Value>> = registry
        .iter()
        .map(|function| {
            function
                .signature()
                .ty()
                .params()
                .into_iter()
                .map(arg_for)
                .collect()
        })
        .collect();

    for (function, args) in registry.iter().zip(&args) {
        let mut closure = Closure::new(function);
        for arg in args {
            closure.apply(arg, &interpreter).unwrap();
        }
        assert_eq!(closure.state(), ClosureState::TotallyApplied);
        let err = closure.apply(&extra, &interpreter).unwrap_err();
        assert_eq!(
            err,
            EvalError::ArityMismatch {
                name: function.name().to_owned(),
                expected: function.arity(),
                got: function.arity() + 1,
            }
        );
    }
}

proptest! {
    #[test]
    fn integer_builtins_agree_with_checked_arithmetic(a in -1000i64..1000, b in -1000i64..1000) {
        prop_assert_eq!(eval_ok(&format!("(+ {a} {b})")), Dynamic::Int(a + b));
        prop_assert_eq!(eval_ok(&format!("(- {a} {b})")), Dynamic::Int(a - b));
        prop_assert_eq!(eval_ok(&format!("(* {a} {b})")), Dynamic::Int(a * b));
        prop_assert_eq!(eval_ok(&format!("(< {a} {b})")), Dynamic::Bool(a < b));
        if b == 0 {
            prop_assert_eq!(eval_source(&format!("(/ {a} {b})")).unwrap_err(), EvalError::DivisionByZero);
        } else {
            prop_assert_eq!(eval_ok(&format!("(/ {a} {b})")), Dynamic::Int(a / b));
            prop_assert_eq!(eval_ok(&format!("(% {a} {b})")), Dynamic::Int(a % b));
        }
    }
}
