//! Type representation.

use std::fmt;

use crate::prototype::VarNames;

/// Name of the integer constant type.
pub const INT: &str = "Int";
/// Name of the boolean constant type.
pub const BOOL: &str = "Bool";
/// Name of the string constant type.
pub const STRING: &str = "String";
/// Name of the type of the empty list.
pub const VOID: &str = "Void";

/// Type variable, identified by a small integer.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct TypeVar(pub u32);

impl TypeVar {
    pub fn new(id: u32) -> Self {
        TypeVar(id)
    }

    pub fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TypeVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// A type.
///
/// Multi-argument functions are curried: `Int -> Int -> Bool` is
/// `Arrow(Int, Arrow(Int, Bool))`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    /// Placeholder, bound by unification or quantified by a prototype.
    Var(TypeVar),
    /// Nominal base type such as `Int`.
    Const(String),
    /// Function type `domain -> codomain`.
    Arrow(Box<Type>, Box<Type>),
}

impl Type {
    pub fn var(id: u32) -> Self {
        Type::Var(TypeVar(id))
    }

    pub fn constant(name: impl Into<String>) -> Self {
        Type::Const(name.into())
    }

    pub fn int() -> Self {
        Type::constant(INT)
    }

    pub fn bool() -> Self {
        Type::constant(BOOL)
    }

    pub fn string() -> Self {
        Type::constant(STRING)
    }

    pub fn void() -> Self {
        Type::constant(VOID)
    }

    pub fn arrow(domain: Type, codomain: Type) -> Self {
        Type::Arrow(Box::new(domain), Box::new(codomain))
    }

    /// Curried function type: `function([A, B], R)` is `A -> B -> R`.
    pub fn function(params: impl IntoIterator<Item = Type>, ret: Type) -> Self {
        let params: Vec<Type> = params.into_iter().collect();
        params
            .into_iter()
            .rev()
            .fold(ret, |codomain, domain| Type::arrow(domain, codomain))
    }

    pub fn is_arrow(&self) -> bool {
        matches!(self, Type::Arrow(..))
    }

    /// Name of a constant type.
    pub fn const_name(&self) -> Option<&str> {
        match self {
            Type::Const(name) => Some(name),
            _ => None,
        }
    }

    /// Number of arrows along the right spine.
    pub fn arity(&self) -> usize {
        let mut arity = 0;
        let mut ty = self;
        while let Type::Arrow(_, codomain) = ty {
            arity += 1;
            ty = codomain;
        }
        arity
    }

    /// Domains along the right spine, in application order.
    pub fn params(&self) -> Vec<&Type> {
        let mut params = Vec::new();
        let mut ty = self;
        while let Type::Arrow(domain, codomain) = ty {
            params.push(&**domain);
            ty = codomain;
        }
        params
    }

    /// The type left after every parameter is supplied.
    pub fn result(&self) -> &Type {
        let mut ty = self;
        while let Type::Arrow(_, codomain) = ty {
            ty = codomain;
        }
        ty
    }
}

impl fmt::Display for Type {
    /// Variables are named `a`, `b`, ... in order of first appearance.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        VarNames::of(self).write_type(f, self)
    }
}
