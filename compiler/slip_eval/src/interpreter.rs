//! Tree-walking evaluator.

use slip_ir::Value;
use slip_stack::ensure_sufficient_stack;
use slip_types::{Type, TypeChecker};

use crate::closure::Closure;
use crate::dynamic::{Dynamic, FromDynamic};
use crate::error::{EvalError, EvalResult};
use crate::function::Function;
use crate::registry::Registry;

/// Evaluates expressions against a registry.
///
/// Literals evaluate to themselves (an atom to its name, the empty list to
/// [`Dynamic::Unit`]). A call resolves its head to a function, feeds that
/// function's [`Closure`] the remaining elements left to right and asks for
/// the result.
#[derive(Clone, Copy)]
pub struct Interpreter<'r> {
    registry: &'r Registry,
}

impl<'r> Interpreter<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Interpreter { registry }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Evaluate `expr` to a value.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn eval<'a>(&'a self, expr: &'a Value) -> EvalResult<Dynamic> {
        ensure_sufficient_stack(|| match expr {
            Value::Int(n) => Ok(Dynamic::Int(*n)),
            Value::Bool(b) => Ok(Dynamic::Bool(*b)),
            Value::Str(s) | Value::Atom(s) => Ok(Dynamic::Str(s.clone())),
            Value::List(items) if items.is_empty() => Ok(Dynamic::Unit),
            Value::List(_) => self.call(expr)?.result(),
        })
    }

    /// Evaluate `expr` and require a value of type `expected`.
    pub fn eval_to(&self, expr: &Value, expected: &Type) -> EvalResult<Dynamic> {
        let value = self.eval(expr)?;
        if value.fits(expected) {
            Ok(value)
        } else {
            Err(EvalError::TypeMismatch {
                expected: expected.to_string(),
                found: value.type_name().to_owned(),
            })
        }
    }

    /// Evaluate `expr` to a native value.
    pub fn eval_as<T: FromDynamic>(&self, expr: &Value) -> EvalResult<T> {
        T::from_dynamic(self.eval_to(expr, &T::expected_type())?)
    }

    /// Evaluate `expr` to a closure without finishing the call.
    ///
    /// An atom yields a fresh closure of the function it names. A call
    /// yields its head's closure with the call's arguments applied, so a
    /// partial application like `(+ 1)` can head another call.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn eval_callable<'a>(&'a self, expr: &'a Value) -> EvalResult<Closure<'a>> {
        ensure_sufficient_stack(|| match expr {
            Value::Atom(name) => self.resolve(name, std::iter::empty()).map(Closure::new),
            Value::List(items) if !items.is_empty() => self.call(expr),
            other => Err(not_a_function(other)),
        })
    }

    /// Closure for the call `expr`, every argument applied.
    ///
    /// A curried call such as `((== true) false)` is taken as a whole: the
    /// innermost head is resolved against every argument of the spine, then
    /// the arguments are applied innermost first.
    fn call<'a>(&'a self, expr: &'a Value) -> EvalResult<Closure<'a>> {
        let (innermost, outer) = expr.innermost_call();
        let Some((head, own)) = innermost.split_call() else {
            return Err(not_a_function(innermost));
        };
        let Some(name) = innermost.fun_name() else {
            return Err(not_a_function(head));
        };

        let spine = || own.iter().chain(outer.iter().copied().flatten());
        let mut closure = Closure::new(self.resolve(name, spine())?);
        for arg in spine() {
            closure.apply(arg, self)?;
        }
        Ok(closure)
    }

    /// The function `name` denotes when called with `args`.
    ///
    /// A name with several overloads is resolved by type checking the
    /// arguments against each signature in turn.
    fn resolve<'v>(
        &self,
        name: &str,
        args: impl IntoIterator<Item = &'v Value>,
    ) -> EvalResult<&'r Function> {
        let registry = self.registry;
        match registry.overload_count(name) {
            0 => Err(EvalError::UnknownFunction {
                name: name.to_owned(),
            }),
            1 => registry.get(name, 0).ok_or_else(|| unknown(name)),
            _ => {
                let resolution = TypeChecker::new(registry).resolve(name, args)?;
                tracing::debug!(name, index = resolution.index, "overload");
                registry.get(name, resolution.index).ok_or_else(|| unknown(name))
            }
        }
    }
}

fn unknown(name: &str) -> EvalError {
    EvalError::UnknownFunction {
        name: name.to_owned(),
    }
}

fn not_a_function(value: &Value) -> EvalError {
    EvalError::NotAFunction {
        found: value.tagged().to_string(),
    }
}
