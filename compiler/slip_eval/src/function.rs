//! Registered functions.

use std::fmt;
use std::rc::Rc;

use slip_types::{Prototype, Type};

use crate::closure::Thunk;
use crate::dynamic::Dynamic;
use crate::error::EvalResult;
use crate::native::Args;

/// Implementation over evaluated arguments.
pub type NormalFn = dyn Fn(Args) -> EvalResult<Dynamic>;

/// Implementation over unevaluated arguments.
pub type SpecialFn = dyn Fn(&[Thunk<'_>]) -> EvalResult<Dynamic>;

#[derive(Clone)]
pub enum FunctionKind {
    /// Arguments are evaluated, in order, as they are applied.
    Normal {
        /// Type each argument is evaluated to.
        params: Vec<Type>,
        native: Rc<NormalFn>,
    },
    /// Arguments are handed over unevaluated, so the implementation decides
    /// which of them ever run.
    Special(Rc<SpecialFn>),
}

/// One overload of a name.
#[derive(Clone)]
pub struct Function {
    key: String,
    name: String,
    signature: Prototype,
    arity: usize,
    kind: FunctionKind,
}

impl Function {
    pub(crate) fn new(name: &str, signature: Prototype, arity: usize, kind: FunctionKind) -> Self {
        Function {
            key: format!("{name} : {signature}"),
            name: name.to_owned(),
            signature,
            arity,
            kind,
        }
    }

    /// Name and signature, e.g. `+ : Int -> Int -> Int`. Unique per registry.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signature(&self) -> &Prototype {
        &self.signature
    }

    /// Number of arguments a call must supply.
    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn kind(&self) -> &FunctionKind {
        &self.kind
    }

    pub fn is_special(&self) -> bool {
        matches!(self.kind, FunctionKind::Special(_))
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("key", &self.key)
            .field("arity", &self.arity)
            .field("special", &self.is_special())
            .finish_non_exhaustive()
    }
}
