//! Curried application state.
//!
//! A [`Closure`] is created for one evaluation of a call and accepts raw
//! argument nodes one at a time. Normal functions evaluate each node on
//! arrival; special functions keep it as a [`Thunk`] for the implementation
//! to force (or not) once every argument is in.

use std::fmt;

use slip_ir::Value;
use slip_types::Type;

use crate::dynamic::{Dynamic, FromDynamic};
use crate::error::{EvalError, EvalResult};
use crate::function::{Function, FunctionKind, NormalFn, SpecialFn};
use crate::interpreter::Interpreter;
use crate::native::Args;

/// An argument node paired with the interpreter that will evaluate it.
#[derive(Clone, Copy)]
pub struct Thunk<'a> {
    node: &'a Value,
    interpreter: &'a Interpreter<'a>,
}

impl<'a> Thunk<'a> {
    pub fn new(node: &'a Value, interpreter: &'a Interpreter<'a>) -> Self {
        Thunk { node, interpreter }
    }

    pub fn node(&self) -> &'a Value {
        self.node
    }

    /// Evaluate the node.
    pub fn force(&self) -> EvalResult<Dynamic> {
        self.interpreter.eval(self.node)
    }

    pub fn force_as<T: FromDynamic>(&self) -> EvalResult<T> {
        self.interpreter.eval_as(self.node)
    }
}

impl fmt::Debug for Thunk<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Thunk({})", self.node.tagged())
    }
}

/// How far a closure has been applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClosureState {
    /// `filled` of the function's arguments have been supplied.
    Unfilled { filled: usize },
    TotallyApplied,
}

#[derive(Clone)]
enum Filled<'a> {
    Evaluated {
        params: &'a [Type],
        native: &'a NormalFn,
        args: Args,
    },
    Deferred {
        native: &'a SpecialFn,
        thunks: Vec<Thunk<'a>>,
    },
}

impl Filled<'_> {
    fn len(&self) -> usize {
        match self {
            Filled::Evaluated { args, .. } => args.len(),
            Filled::Deferred { thunks, .. } => thunks.len(),
        }
    }
}

/// A function together with the arguments supplied to it so far.
#[derive(Clone)]
pub struct Closure<'a> {
    function: &'a Function,
    filled: Filled<'a>,
}

impl<'a> Closure<'a> {
    pub fn new(function: &'a Function) -> Self {
        let filled = match function.kind() {
            FunctionKind::Normal { params, native } => Filled::Evaluated {
                params,
                native: &**native,
                args: Args::new(),
            },
            FunctionKind::Special(native) => Filled::Deferred {
                native: &**native,
                thunks: Vec::with_capacity(function.arity()),
            },
        };
        Closure { function, filled }
    }

    pub fn function(&self) -> &'a Function {
        self.function
    }

    /// Number of arguments supplied so far.
    pub fn filled(&self) -> usize {
        self.filled.len()
    }

    pub fn state(&self) -> ClosureState {
        let filled = self.filled();
        if filled >= self.function.arity() {
            ClosureState::TotallyApplied
        } else {
            ClosureState::Unfilled { filled }
        }
    }

    /// Supply the next argument.
    ///
    /// A normal function's argument is evaluated here, to the type of the
    /// parameter it fills. Fails once every parameter is filled.
    pub fn apply(&mut self, node: &'a Value, interpreter: &'a Interpreter<'a>) -> EvalResult<()> {
        let filled = self.filled();
        let arity = self.function.arity();
        if filled >= arity {
            return Err(EvalError::ArityMismatch {
                name: self.function.name().to_owned(),
                expected: arity,
                got: filled + 1,
            });
        }

        match &mut self.filled {
            Filled::Evaluated { params, args, .. } => {
                let value = match params.get(filled) {
                    Some(expected) => interpreter.eval_to(node, expected)?,
                    None => interpreter.eval(node)?,
                };
                args.push(value);
            }
            Filled::Deferred { thunks, .. } => thunks.push(Thunk::new(node, interpreter)),
        }
        Ok(())
    }

    /// Call the function. Every argument must have been supplied.
    pub fn result(&self) -> EvalResult<Dynamic> {
        let filled = self.filled();
        let arity = self.function.arity();
        if filled != arity {
            return Err(EvalError::ArityMismatch {
                name: self.function.name().to_owned(),
                expected: arity,
                got: filled,
            });
        }

        tracing::trace!(key = self.function.key(), "call");
        match &self.filled {
            Filled::Evaluated { native, args, .. } => native(args.clone()),
            Filled::Deferred { native, thunks } => native(thunks.as_slice()),
        }
    }
}

impl fmt::Debug for Closure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("function", &self.function.key())
            .field("state", &self.state())
            .finish()
    }
}
