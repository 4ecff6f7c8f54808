//! One interpreter session: a registry plus the options it runs under.

use std::fmt;

use slip_eval::{Dynamic, Interpreter, Registry};
use slip_ir::Value;
use slip_types::{check, Namer, Prototype};

use crate::error::Result;
use crate::options::ReplOptions;

/// What evaluating a line produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub value: Dynamic,
    /// Present when the line was type checked.
    pub ty: Option<Prototype>,
    show_type: bool,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.ty, self.show_type) {
            (Some(ty), true) => write!(f, "{} : {ty}", self.value),
            _ => write!(f, "{}", self.value),
        }
    }
}

pub struct Session {
    registry: Registry,
    options: ReplOptions,
}

impl Session {
    /// A session over the standard functions.
    pub fn new(options: ReplOptions) -> Self {
        Session::with_registry(Registry::with_builtins(), options)
    }

    pub fn with_registry(registry: Registry, options: ReplOptions) -> Self {
        Session { registry, options }
    }

    pub fn options(&self) -> &ReplOptions {
        &self.options
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Parse, check (unless disabled) and evaluate one expression.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn eval(&self, source: &str) -> Result<Outcome> {
        let expr = slip_parse::parse(source)?;
        let ty = if self.options.check {
            Some(self.check_expr(&expr)?)
        } else {
            None
        };
        let value = Interpreter::new(&self.registry).eval(&expr)?;
        Ok(Outcome {
            value,
            ty,
            show_type: self.options.show_types,
        })
    }

    /// Type of one expression.
    pub fn type_of(&self, source: &str) -> Result<Prototype> {
        let expr = slip_parse::parse(source)?;
        self.check_expr(&expr)
    }

    /// Tagged parse tree of one expression, e.g. `[+:atom 1:int 2:int]`.
    pub fn parse_tree(&self, source: &str) -> Result<String> {
        let expr = slip_parse::parse(source)?;
        Ok(expr.tagged().to_string())
    }

    /// Registered functions, one per line.
    pub fn builtins(&self) -> String {
        self.registry.dump()
    }

    fn check_expr(&self, expr: &Value) -> Result<Prototype> {
        Ok(check(expr, &self.registry)?)
    }
}

/// Type the application of the signature `fun` to the signature `arg`.
pub fn apply_signatures(fun: &str, arg: &str) -> Result<Prototype> {
    let fun = slip_parse::parse_signature(fun)?;
    let arg = slip_parse::parse_signature(arg)?;
    Ok(fun.apply(&arg, &mut Namer::new())?)
}
