//! Fresh type-variable supply.

use crate::ty::TypeVar;

/// Monotonic counter handing out type-variable ids.
///
/// Every id a `Namer` returns is distinct from every other id it has
/// returned, so prototypes instantiated through the same namer never share
/// variables.
#[derive(Clone, Debug, Default)]
pub struct Namer {
    next: u32,
}

impl Namer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from `first`.
    pub fn starting_at(first: u32) -> Self {
        Namer { next: first }
    }

    /// Mint a variable that has not been handed out before.
    pub fn fresh(&mut self) -> TypeVar {
        let var = TypeVar(self.next);
        self.next += 1;
        var
    }

    /// The id the next call to [`fresh`](Self::fresh) returns.
    pub fn peek(&self) -> u32 {
        self.next
    }
}
