//! Shared test utilities for phase tests.

use slip_eval::{Dynamic, EvalResult, Registry};
use slip_types::{Prototype, TypeResult};

/// Parse and evaluate against the standard registry.
pub fn eval_source(source: &str) -> EvalResult<Dynamic> {
    let expr = slip_parse::parse(source).expect("source should parse");
    slip_eval::eval(&expr, &Registry::with_builtins())
}

/// Parse, evaluate and expect success.
pub fn eval_ok(source: &str) -> Dynamic {
    match eval_source(source) {
        Ok(value) => value,
        Err(err) => panic!("Expected `{source}` to evaluate, got: {err}"),
    }
}

/// Parse and type check against the standard registry.
pub fn check_source(source: &str) -> TypeResult<Prototype> {
    let expr = slip_parse::parse(source).expect("source should parse");
    slip_types::check(&expr, &Registry::with_builtins())
}

/// Parse, check and return the shown type.
pub fn type_ok(source: &str) -> String {
    match check_source(source) {
        Ok(ty) => ty.show(),
        Err(err) => panic!("Expected `{source}` to type check, got: {err}"),
    }
}
