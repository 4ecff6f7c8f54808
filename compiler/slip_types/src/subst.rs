//! Substitutions and their application.

use rustc_hash::FxHashMap;

use crate::traverse::TypeFolder;
use crate::ty::{Type, TypeVar};

/// A finite assignment of types to type variables.
///
/// Built fresh by every [`bind`](crate::bind) or instantiation and dropped
/// once applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: FxHashMap<TypeVar, Type>,
}

impl Substitution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `var := ty`, handing back the previous binding if there was one.
    pub fn insert(&mut self, var: TypeVar, ty: Type) -> Option<Type> {
        self.bindings.insert(var, ty)
    }

    pub fn get(&self, var: TypeVar) -> Option<&Type> {
        self.bindings.get(&var)
    }

    pub fn contains(&self, var: TypeVar) -> bool {
        self.bindings.contains_key(&var)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeVar, &Type)> {
        self.bindings.iter().map(|(var, ty)| (*var, ty))
    }
}

impl FromIterator<(TypeVar, Type)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (TypeVar, Type)>>(iter: I) -> Self {
        Substitution {
            bindings: iter.into_iter().collect(),
        }
    }
}

/// Replace every variable bound in `subs` with a copy of its binding.
///
/// Single pass: variables occurring inside a binding are left as they are.
pub fn substitute(subs: &Substitution, ty: &Type) -> Type {
    struct Substitutor<'a> {
        subs: &'a Substitution,
    }

    impl TypeFolder for Substitutor<'_> {
        fn fold_var(&mut self, var: TypeVar) -> Type {
            self.subs.get(var).cloned().unwrap_or(Type::Var(var))
        }
    }

    if subs.is_empty() {
        return ty.clone();
    }
    Substitutor { subs }.fold(ty)
}
