//! Type system for slip.
//!
//! Types are small boxed trees ([`Type`]): variables, named constants and
//! arrows. A [`Prototype`] is a type together with the variables it
//! quantifies over, `forall a b. a -> b -> a`.
//!
//! # Engine
//!
//! The unification engine is a handful of pure functions:
//!
//! - [`bind`] matches a template against a concrete type, producing a
//!   [`Substitution`]
//! - [`substitute`] applies a substitution to a type
//! - [`Prototype::instantiate`] renames the quantified variables with fresh
//!   ids from a [`Namer`]
//! - [`Prototype::apply`] types the application of a function prototype to an
//!   argument prototype
//!
//! There is no occurs check. The language has no way to build a recursive
//! type, so none is needed to reject one.
//!
//! # Checking
//!
//! [`TypeChecker`] walks an expression the same way the evaluator does and
//! folds [`Prototype::apply`] over the arguments of every call. It looks
//! function signatures up through the [`SignatureEnv`] trait and resolves
//! overloads by trying each candidate signature in declaration order.

mod check;
mod error;
mod namer;
mod prototype;
mod subst;
mod traverse;
mod ty;
mod unify;

pub use check::{check, Resolution, SignatureEnv, TypeChecker};
pub use error::{TypeError, TypeResult};
pub use namer::Namer;
pub use prototype::{letters_var, var_letters, Prototype};
pub use subst::{substitute, Substitution};
pub use traverse::{TypeFolder, TypeVisitor};
pub use ty::{Type, TypeVar, BOOL, INT, STRING, VOID};
pub use unify::{bind, UnifyError};
