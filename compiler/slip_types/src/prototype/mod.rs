//! Polymorphic types: a type plus the variables it quantifies over.

mod show;

pub use show::{letters_var, var_letters};
pub(crate) use show::VarNames;

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{TypeError, TypeResult};
use crate::namer::Namer;
use crate::subst::{substitute, Substitution};
use crate::traverse::TypeVisitor;
use crate::ty::{Type, TypeVar};
use crate::unify::bind;

/// `forall vars. ty`.
///
/// The quantified set is always computed from the free variables of `ty`
/// when the prototype is built, so it cannot drift from the type after a
/// substitution. Every free variable is quantified: there are no bindings in
/// the language, so nothing else could own one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Prototype {
    ty: Type,
    vars: BTreeSet<TypeVar>,
}

impl Prototype {
    /// Generalize `ty` over all of its free variables.
    pub fn new(ty: Type) -> Self {
        let vars = free_vars(&ty);
        Prototype { ty, vars }
    }

    pub fn int() -> Self {
        Prototype::new(Type::int())
    }

    pub fn bool() -> Self {
        Prototype::new(Type::bool())
    }

    pub fn string() -> Self {
        Prototype::new(Type::string())
    }

    pub fn void() -> Self {
        Prototype::new(Type::void())
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn into_type(self) -> Type {
        self.ty
    }

    pub fn vars(&self) -> &BTreeSet<TypeVar> {
        &self.vars
    }

    /// No quantified variables.
    pub fn is_mono(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn is_function(&self) -> bool {
        self.ty.is_arrow()
    }

    pub fn arity(&self) -> usize {
        self.ty.arity()
    }

    /// Give every quantified variable a fresh id from `namer`.
    ///
    /// Each use site of a polymorphic function instantiates its prototype,
    /// so two uses never alias each other's variables.
    pub fn instantiate(&self, namer: &mut Namer) -> Prototype {
        if self.is_mono() {
            return self.clone();
        }
        let subs: Substitution = self
            .vars
            .iter()
            .map(|&var| (var, Type::Var(namer.fresh())))
            .collect();
        Prototype::new(substitute(&subs, &self.ty))
    }

    /// Type the application of this function prototype to one argument.
    ///
    /// Both sides are instantiated through `namer`, the arrow's domain is
    /// bound against the argument, and the substituted codomain is
    /// generalized again: whatever the argument did not pin down stays
    /// polymorphic in the result.
    pub fn apply(&self, arg: &Prototype, namer: &mut Namer) -> TypeResult<Prototype> {
        let fun = self.instantiate(namer);
        let arg = arg.instantiate(namer);

        let Type::Arrow(domain, codomain) = fun.ty else {
            return Err(TypeError::NotAFunction { found: fun });
        };

        let subs = bind(&domain, &arg.ty)?;
        Ok(Prototype::new(substitute(&subs, &codomain)))
    }

    /// Apply to each argument in turn.
    pub fn apply_all<'a>(
        &self,
        args: impl IntoIterator<Item = &'a Prototype>,
        namer: &mut Namer,
    ) -> TypeResult<Prototype> {
        args.into_iter()
            .try_fold(self.clone(), |fun, arg| fun.apply(arg, namer))
    }

    /// Rename the variables to `0, 1, 2, ...` in order of first appearance.
    pub fn canonical(&self) -> Prototype {
        let names = VarNames::of(&self.ty);
        let subs: Substitution = names
            .order()
            .iter()
            .zip(0u32..)
            .map(|(&var, id)| (var, Type::var(id)))
            .collect();
        Prototype::new(substitute(&subs, &self.ty))
    }

    /// Equal up to renaming of quantified variables.
    pub fn same_shape(&self, other: &Prototype) -> bool {
        self.canonical() == other.canonical()
    }

    /// Render as `forall a. Bool -> a -> a -> a`.
    pub fn show(&self) -> String {
        self.to_string()
    }
}

impl From<Type> for Prototype {
    fn from(ty: Type) -> Self {
        Prototype::new(ty)
    }
}

impl fmt::Display for Prototype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = VarNames::of(&self.ty);
        if !self.vars.is_empty() {
            f.write_str("forall")?;
            for &var in names.order() {
                write!(f, " {}", names.name(var))?;
            }
            f.write_str(". ")?;
        }
        names.write_type(f, &self.ty)
    }
}

/// Variables occurring in `ty`.
fn free_vars(ty: &Type) -> BTreeSet<TypeVar> {
    struct Collector {
        vars: BTreeSet<TypeVar>,
    }

    impl TypeVisitor for Collector {
        fn visit_var(&mut self, var: TypeVar) {
            self.vars.insert(var);
        }
    }

    let mut collector = Collector {
        vars: BTreeSet::new(),
    };
    collector.visit(ty);
    collector.vars
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests unwrap for brevity")]
mod tests;
