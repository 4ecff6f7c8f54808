//! Evaluator for slip.
//!
//! # Architecture
//!
//! - [`Registry`] maps names to overload sets of [`Function`]s, each a
//!   signature plus a native implementation
//! - [`Closure`] is the curried application state of one call: it accepts
//!   argument nodes one at a time and calls the native once saturated
//! - [`Interpreter`] walks a [`Value`] tree, resolving call heads through the
//!   registry and asking the type checker to pick among overloads
//!
//! Functions come in two flavours. Normal ones are declared with a plain
//! Rust closure over `i64`, `bool`, `String` or [`Dynamic`] parameters and
//! receive their arguments evaluated. Special ones receive [`Thunk`]s and
//! decide which arguments to evaluate, which is how `if` stays lazy in its
//! branches.

mod builtins;
mod closure;
mod dynamic;
mod error;
mod function;
mod interpreter;
mod native;
mod registry;

pub use closure::{Closure, ClosureState, Thunk};
pub use dynamic::{Dynamic, FromDynamic, IntoEvalResult};
pub use error::{EvalError, EvalResult};
pub use function::{Function, FunctionKind, NormalFn, SpecialFn};
pub use interpreter::Interpreter;
pub use native::{Args, NativeFn};
pub use registry::Registry;

use slip_ir::Value;

/// Evaluate `expr` against `registry`.
pub fn eval(expr: &Value, registry: &Registry) -> EvalResult<Dynamic> {
    Interpreter::new(registry).eval(expr)
}
