//! Diagnostic printer for expression trees.

use std::fmt;

use slip_stack::ensure_sufficient_stack;

use crate::Value;

/// Display adapter returned by [`Value::tagged`].
///
/// Every leaf is written as `payload:kind`; lists are bracketed with their
/// elements separated by single spaces.
#[derive(Clone, Copy, Debug)]
pub struct Tagged<'a>(pub &'a Value);

impl fmt::Display for Tagged<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Int(n) => write!(f, "{n}:int"),
            Value::Bool(b) => write!(f, "{b}:bool"),
            Value::Str(s) => write!(f, "\"{s}\":str"),
            Value::Atom(name) => write!(f, "{name}:atom"),
            Value::List(items) => ensure_sufficient_stack(|| {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", item.tagged())?;
                }
                f.write_str("]")
            }),
        }
    }
}
