//! Type traversal traits.
//!
//! `TypeFolder` rebuilds a type, `TypeVisitor` walks one. Both dispatch to a
//! per-variant method with a structural default, so an implementation only
//! overrides the variants it cares about (usually just variables).

use crate::ty::{Type, TypeVar};

/// Transform a type by structural recursion.
///
/// # Example
///
/// ```text
/// struct Rename<'a>(&'a FxHashMap<TypeVar, TypeVar>);
///
/// impl TypeFolder for Rename<'_> {
///     fn fold_var(&mut self, var: TypeVar) -> Type {
///         Type::Var(self.0.get(&var).copied().unwrap_or(var))
///     }
/// }
/// ```
pub trait TypeFolder {
    fn fold(&mut self, ty: &Type) -> Type {
        match ty {
            Type::Var(var) => self.fold_var(*var),
            Type::Const(name) => self.fold_const(name),
            Type::Arrow(domain, codomain) => self.fold_arrow(domain, codomain),
        }
    }

    fn fold_var(&mut self, var: TypeVar) -> Type {
        Type::Var(var)
    }

    fn fold_const(&mut self, name: &str) -> Type {
        Type::constant(name)
    }

    fn fold_arrow(&mut self, domain: &Type, codomain: &Type) -> Type {
        let domain = self.fold(domain);
        let codomain = self.fold(codomain);
        Type::arrow(domain, codomain)
    }
}

/// Walk a type by structural recursion, left to right.
pub trait TypeVisitor {
    fn visit(&mut self, ty: &Type) {
        match ty {
            Type::Var(var) => self.visit_var(*var),
            Type::Const(name) => self.visit_const(name),
            Type::Arrow(domain, codomain) => self.visit_arrow(domain, codomain),
        }
    }

    fn visit_var(&mut self, _var: TypeVar) {}

    fn visit_const(&mut self, _name: &str) {}

    fn visit_arrow(&mut self, domain: &Type, codomain: &Type) {
        self.visit(domain);
        self.visit(codomain);
    }
}
