//! Evaluation errors.

use slip_types::TypeError;

pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// The head of a call names no registered function.
    #[error("unknown function `{name}`")]
    UnknownFunction { name: String },

    /// A call was finished with too few arguments, or given one too many.
    #[error("{}", arity_message(name, *expected, *got))]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    /// An argument evaluated to a value of the wrong type.
    #[error("expected a `{expected}` expression, found `{found}`")]
    TypeMismatch { expected: String, found: String },

    /// The head of a call is a literal, not something callable.
    #[error("`{found}` is not a function")]
    NotAFunction { found: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in `{operation}`")]
    IntegerOverflow { operation: &'static str },

    /// No overload of a name accepts the arguments it was called with.
    #[error("cannot resolve call: {0}")]
    Resolution(#[from] TypeError),
}

fn arity_message(name: &str, expected: usize, got: usize) -> String {
    let arg_word = if expected == 1 {
        "argument"
    } else {
        "arguments"
    };
    if got > expected {
        return format!("`{name}` takes {expected} {arg_word}: no more remaining unfilled arguments");
    }
    if name.is_empty() {
        format!("expected {expected} {arg_word}, got {got}")
    } else {
        format!("`{name}` expects {expected} {arg_word}, got {got}")
    }
}
