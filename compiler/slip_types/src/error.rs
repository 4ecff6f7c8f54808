//! Type checking errors.

use crate::prototype::Prototype;
use crate::unify::UnifyError;

pub type TypeResult<T> = Result<T, TypeError>;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TypeError {
    /// The head of a call names nothing in the environment.
    #[error("unknown function `{name}`")]
    UnknownFunction { name: String },

    /// Something that is not an arrow was applied to an argument.
    #[error("`{found}` is not a function type")]
    NotAFunction { found: Prototype },

    #[error(transparent)]
    Unification(#[from] UnifyError),

    /// Every overload of `name` rejected the arguments. `first` is the
    /// complaint of the first candidate tried.
    #[error("no overload of `{name}` accepts these arguments: {first}")]
    NoMatchingOverload { name: String, first: Box<TypeError> },
}
