//! Unification error types.

use crate::ty::{Type, TypeVar};

/// Error from [`bind`](crate::bind).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum UnifyError {
    /// A constant template met a different constant, or an arrow.
    #[error("cannot unify `{expected}` with `{found}`")]
    ConstMismatch { expected: Type, found: Type },

    /// An arrow template met something that is not an arrow.
    #[error("cannot unify function type `{expected}` with `{found}`")]
    ArrowMismatch { expected: Type, found: Type },

    /// The same variable was bound twice within one unification.
    #[error("type variable {var} is already bound to `{bound}`, cannot also bind it to `{attempted}`")]
    AlreadyBound {
        var: TypeVar,
        bound: Type,
        attempted: Type,
    },
}
