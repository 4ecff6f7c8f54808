//! One-way unification.
//!
//! [`bind`] matches a *template* (a parameter type, which may contain
//! variables) against a *concrete* type (an argument type) and returns the
//! substitution that makes the template fit. A template variable takes the
//! whole corresponding concrete subtree. A concrete variable facing a template
//! constant is bound to that constant.
//!
//! Each variable may be bound once per call. Binding it a second time fails
//! even when both sides would agree, and no occurs check is performed.

mod error;

pub use error::UnifyError;

use crate::subst::Substitution;
use crate::ty::{Type, TypeVar};

/// Unify `template` against `concrete`.
pub fn bind(template: &Type, concrete: &Type) -> Result<Substitution, UnifyError> {
    let mut binder = Binder {
        subs: Substitution::new(),
    };
    binder.bind(template, concrete)?;
    tracing::trace!(%template, %concrete, bindings = binder.subs.len(), "bound");
    Ok(binder.subs)
}

struct Binder {
    subs: Substitution,
}

impl Binder {
    fn bind(&mut self, template: &Type, concrete: &Type) -> Result<(), UnifyError> {
        match (template, concrete) {
            (Type::Var(var), _) => self.insert(*var, concrete),

            (Type::Const(expected), Type::Const(found)) if expected == found => Ok(()),
            (Type::Const(_), Type::Var(var)) => self.insert(*var, template),
            (Type::Const(_), _) => Err(UnifyError::ConstMismatch {
                expected: template.clone(),
                found: concrete.clone(),
            }),

            (Type::Arrow(domain, codomain), Type::Arrow(found_domain, found_codomain)) => {
                self.bind(domain, found_domain)?;
                self.bind(codomain, found_codomain)
            }
            (Type::Arrow(..), _) => Err(UnifyError::ArrowMismatch {
                expected: template.clone(),
                found: concrete.clone(),
            }),
        }
    }

    fn insert(&mut self, var: TypeVar, ty: &Type) -> Result<(), UnifyError> {
        if let Some(bound) = self.subs.get(var) {
            return Err(UnifyError::AlreadyBound {
                var,
                bound: bound.clone(),
                attempted: ty.clone(),
            });
        }
        self.subs.insert(var, ty.clone());
        Ok(())
    }
}
