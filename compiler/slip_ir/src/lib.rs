//! Expression tree for slip.
//!
//! The parser produces a [`Value`], an owned acyclic tree of literals and
//! lists. Every later phase (type checking, evaluation, printing) reads it;
//! none of them mutate it.
//!
//! A non-empty [`Value::List`] is a call: its head names the operation and the
//! remaining elements are the arguments. The empty list is the void unit.

mod print;

pub use print::Tagged;

/// A parsed expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// Integer literal.
    Int(i64),
    /// Boolean literal (`true` / `false`).
    Bool(bool),
    /// Quoted string literal.
    Str(String),
    /// Bare symbol. Names a function in head position, reads as a string
    /// constant anywhere else.
    Atom(String),
    /// Call expression, or the void unit when empty.
    List(Vec<Value>),
}

impl Value {
    pub fn int(value: i64) -> Self {
        Value::Int(value)
    }

    pub fn bool(value: bool) -> Self {
        Value::Bool(value)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Value::Str(value.into())
    }

    pub fn atom(name: impl Into<String>) -> Self {
        Value::Atom(name.into())
    }

    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(items.into_iter().collect())
    }

    /// The empty list.
    pub fn unit() -> Self {
        Value::List(Vec::new())
    }

    /// Build the call `(name args...)`.
    pub fn call(name: impl Into<String>, args: impl IntoIterator<Item = Value>) -> Self {
        let mut items = vec![Value::atom(name)];
        items.extend(args);
        Value::List(items)
    }

    /// Short lowercase tag naming the variant, as used by the printer.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Bool(_) => "bool",
            Value::Str(_) => "str",
            Value::Atom(_) => "atom",
            Value::List(_) => "list",
        }
    }

    /// The elements of a list, or `None` for a literal.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Value::Atom(name) => Some(name),
            _ => None,
        }
    }

    /// Name of the called function: the head of a list, if that head is an
    /// atom.
    ///
    /// Returns `None` for literals, the empty list, and lists whose head is
    /// itself a list (a nested callable).
    pub fn fun_name(&self) -> Option<&str> {
        self.as_list()?.first()?.as_atom()
    }

    /// Split a non-empty list into its head and arguments.
    pub fn split_call(&self) -> Option<(&Value, &[Value])> {
        self.as_list()?.split_first()
    }

    /// Peel a curried call `((f a) b) c` down to its innermost call `(f a)`.
    ///
    /// Also returns the argument groups of the enclosing lists, innermost
    /// first (`[b]`, then `[c]`). Anything that is not a call with a
    /// non-empty list as its head is its own innermost call.
    pub fn innermost_call(&self) -> (&Value, Vec<&[Value]>) {
        let mut outer = Vec::new();
        let mut current = self;
        while let Some((head, args)) = current.split_call() {
            if !matches!(head, Value::List(inner) if !inner.is_empty()) {
                break;
            }
            outer.push(args);
            current = head;
        }
        outer.reverse();
        (current, outer)
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Value::List(items) if items.is_empty())
    }

    /// Render as `tag:kind` tokens, e.g. `[+:atom 1:int 2:int]`.
    pub fn tagged(&self) -> Tagged<'_> {
        Tagged(self)
    }
}

// Children are moved onto a work list before they drop, so freeing a
// deeply nested tree does not recurse.
impl Drop for Value {
    fn drop(&mut self) {
        let Value::List(items) = self else {
            return;
        };
        if !items.iter().any(|item| matches!(item, Value::List(inner) if !inner.is_empty())) {
            return;
        }
        let mut pending = std::mem::take(items);
        while let Some(mut item) = pending.pop() {
            if let Value::List(children) = &mut item {
                pending.append(children);
            }
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}
