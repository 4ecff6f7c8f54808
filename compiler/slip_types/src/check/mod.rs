//! Type checking of expression trees.
//!
//! The checker walks a [`Value`] the way the evaluator does. Literals have
//! fixed types, and a call folds [`Prototype::apply`] over its argument types
//! starting from the head's signature. Names with several signatures are
//! resolved here: candidates are tried in declaration order and the first one
//! that accepts every argument wins.

use slip_ir::Value;
use slip_stack::ensure_sufficient_stack;

use crate::error::{TypeError, TypeResult};
use crate::namer::Namer;
use crate::prototype::Prototype;

/// Where the checker finds function signatures.
pub trait SignatureEnv {
    /// Signatures registered under `name`, in declaration order. Empty when
    /// the name is unknown.
    fn signatures(&self, name: &str) -> Vec<&Prototype>;
}

/// The overload chosen for a call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Position of the chosen signature among the name's signatures.
    pub index: usize,
    /// Type of the call after applying every argument.
    pub prototype: Prototype,
}

/// Infers expression types against a [`SignatureEnv`].
///
/// One checker owns one [`Namer`], so every variable minted while checking an
/// expression is distinct from every other.
pub struct TypeChecker<'env, E: ?Sized> {
    env: &'env E,
    namer: Namer,
}

impl<'env, E: SignatureEnv + ?Sized> TypeChecker<'env, E> {
    pub fn new(env: &'env E) -> Self {
        TypeChecker {
            env,
            namer: Namer::new(),
        }
    }

    /// Type of `expr`.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn infer(&mut self, expr: &Value) -> TypeResult<Prototype> {
        ensure_sufficient_stack(|| self.infer_inner(expr))
    }

    fn infer_inner(&mut self, expr: &Value) -> TypeResult<Prototype> {
        match expr {
            Value::Int(_) => Ok(Prototype::int()),
            Value::Bool(_) => Ok(Prototype::bool()),
            Value::Str(_) | Value::Atom(_) => Ok(Prototype::string()),
            Value::List(items) if items.is_empty() => Ok(Prototype::void()),
            Value::List(_) => self.infer_call(expr),
        }
    }

    /// Type of a call. A curried call such as `((== true) false)` resolves its
    /// innermost head against the whole argument spine.
    fn infer_call(&mut self, expr: &Value) -> TypeResult<Prototype> {
        let (innermost, outer) = expr.innermost_call();
        let Some((head, own)) = innermost.split_call() else {
            return Ok(Prototype::void());
        };
        let spine = own.iter().chain(outer.iter().copied().flatten());

        if let Some(name) = innermost.fun_name() {
            return self
                .resolve(name, spine)
                .map(|resolution| resolution.prototype);
        }
        let fun = self.infer(head)?;
        let args = self.infer_args(spine)?;
        fun.apply_all(&args, &mut self.namer)
    }

    /// Pick the signature of `name` that accepts `args`.
    ///
    /// With a single candidate its own error is returned as is. With several,
    /// a failure is reported as [`TypeError::NoMatchingOverload`] carrying the
    /// first candidate's error.
    pub fn resolve<'v>(
        &mut self,
        name: &str,
        args: impl IntoIterator<Item = &'v Value>,
    ) -> TypeResult<Resolution> {
        let env = self.env;
        let candidates = env.signatures(name);
        if candidates.is_empty() {
            return Err(TypeError::UnknownFunction {
                name: name.to_owned(),
            });
        }

        let args = self.infer_args(args)?;

        let mut first_error = None;
        for (index, signature) in candidates.iter().enumerate() {
            match signature.apply_all(&args, &mut self.namer) {
                Ok(prototype) => {
                    tracing::debug!(name, index, %prototype, "resolved call");
                    return Ok(Resolution { index, prototype });
                }
                Err(err) => {
                    tracing::trace!(name, index, %err, "candidate rejected");
                    first_error.get_or_insert(err);
                }
            }
        }

        let first = first_error.ok_or_else(|| TypeError::UnknownFunction {
            name: name.to_owned(),
        })?;
        if candidates.len() == 1 {
            return Err(first);
        }
        Err(TypeError::NoMatchingOverload {
            name: name.to_owned(),
            first: Box::new(first),
        })
    }

    fn infer_args<'v>(
        &mut self,
        args: impl IntoIterator<Item = &'v Value>,
    ) -> TypeResult<Vec<Prototype>> {
        args.into_iter().map(|arg| self.infer(arg)).collect()
    }
}

/// Type of `expr` under `env`, with a fresh checker.
pub fn check<E: SignatureEnv + ?Sized>(expr: &Value, env: &E) -> TypeResult<Prototype> {
    TypeChecker::new(env).infer(expr)
}
