//! Name to overload-set table.

use std::fmt::Write as _;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use slip_types::{Prototype, SignatureEnv, Type};

use crate::builtins;
use crate::closure::Thunk;
use crate::dynamic::Dynamic;
use crate::error::EvalResult;
use crate::function::{Function, FunctionKind};
use crate::native::{Args, NativeFn};

/// Every function known to an interpreter.
///
/// Declaration is append-only. A name declared more than once carries an
/// overload per signature, kept in declaration order; the type checker tries
/// them in that order. Redeclaring an existing key swaps in the new
/// implementation at the old position.
#[derive(Default)]
pub struct Registry {
    functions: Vec<Function>,
    by_name: FxHashMap<String, SmallVec<[usize; 2]>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the standard functions.
    pub fn with_builtins() -> Self {
        let mut registry = Registry::new();
        builtins::declare(&mut registry);
        registry
    }

    /// Declare a function over evaluated arguments.
    ///
    /// The arity and the type each argument is evaluated to come from the
    /// native closure; `signature` is what the type checker sees.
    pub fn declare_fun<P, F>(&mut self, name: &str, signature: Type, native: F) -> &mut Self
    where
        F: NativeFn<P>,
    {
        let signature = Prototype::new(signature);
        if signature.arity() != F::ARITY {
            tracing::warn!(
                name,
                %signature,
                arity = F::ARITY,
                "signature arity differs from the native arity"
            );
        }
        let kind = FunctionKind::Normal {
            params: F::param_types(),
            native: Rc::new(move |args: Args| native.call(args)),
        };
        self.insert(Function::new(name, signature, F::ARITY, kind))
    }

    /// Declare a non-strict function: it receives its arguments unevaluated.
    ///
    /// The arity is the arity of `signature`.
    pub fn declare_special<F>(&mut self, name: &str, signature: Type, native: F) -> &mut Self
    where
        F: Fn(&[Thunk<'_>]) -> EvalResult<Dynamic> + 'static,
    {
        let signature = Prototype::new(signature);
        let arity = signature.arity();
        let kind = FunctionKind::Special(Rc::new(native));
        self.insert(Function::new(name, signature, arity, kind))
    }

    fn insert(&mut self, function: Function) -> &mut Self {
        let overloads = self.by_name.entry(function.name().to_owned()).or_default();

        // Same name and signature: the newer implementation wins.
        if let Some(&index) = overloads
            .iter()
            .find(|&&index| self.functions[index].key() == function.key())
        {
            tracing::debug!(key = function.key(), "redeclared");
            self.functions[index] = function;
            return self;
        }

        tracing::debug!(key = function.key(), "declared");
        overloads.push(self.functions.len());
        self.functions.push(function);
        self
    }

    /// Overloads of `name`, in declaration order.
    pub fn find(&self, name: &str) -> Vec<&Function> {
        self.by_name
            .get(name)
            .map(|overloads| overloads.iter().map(|&index| &self.functions[index]).collect())
            .unwrap_or_default()
    }

    /// The `index`-th overload of `name`.
    pub fn get(&self, name: &str, index: usize) -> Option<&Function> {
        let &slot = self.by_name.get(name)?.get(index)?;
        self.functions.get(slot)
    }

    pub fn overload_count(&self, name: &str) -> usize {
        self.by_name.get(name).map_or(0, SmallVec::len)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Every function, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Function> {
        self.functions.iter()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// One `key` per line, in declaration order.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for function in &self.functions {
            let _ = writeln!(out, "{}", function.key());
        }
        out
    }
}

impl SignatureEnv for Registry {
    fn signatures(&self, name: &str) -> Vec<&Prototype> {
        self.find(name).into_iter().map(Function::signature).collect()
    }
}
