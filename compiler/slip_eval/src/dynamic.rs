//! Runtime values and their conversions to and from native Rust types.

use std::fmt;

use slip_types::{Type, BOOL, INT, STRING, VOID};

use crate::error::{EvalError, EvalResult};

/// The result of evaluating an expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dynamic {
    Int(i64),
    Bool(bool),
    Str(String),
    /// Value of the empty list.
    Unit,
}

impl Dynamic {
    /// Name of the constant type this value inhabits.
    pub fn type_name(&self) -> &'static str {
        match self {
            Dynamic::Int(_) => INT,
            Dynamic::Bool(_) => BOOL,
            Dynamic::Str(_) => STRING,
            Dynamic::Unit => VOID,
        }
    }

    pub fn ty(&self) -> Type {
        Type::constant(self.type_name())
    }

    /// Whether a parameter of type `expected` accepts this value. Type
    /// variables accept anything, function types nothing.
    pub fn fits(&self, expected: &Type) -> bool {
        match expected {
            Type::Var(_) => true,
            Type::Const(name) => name == self.type_name(),
            Type::Arrow(..) => false,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Dynamic::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Dynamic::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Dynamic::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dynamic::Int(n) => write!(f, "{n}"),
            Dynamic::Bool(b) => write!(f, "{b}"),
            Dynamic::Str(s) => f.write_str(s),
            Dynamic::Unit => f.write_str("()"),
        }
    }
}

impl From<i64> for Dynamic {
    fn from(n: i64) -> Self {
        Dynamic::Int(n)
    }
}

impl From<bool> for Dynamic {
    fn from(b: bool) -> Self {
        Dynamic::Bool(b)
    }
}

impl From<String> for Dynamic {
    fn from(s: String) -> Self {
        Dynamic::Str(s)
    }
}

impl From<&str> for Dynamic {
    fn from(s: &str) -> Self {
        Dynamic::Str(s.to_owned())
    }
}

/// A native parameter type.
pub trait FromDynamic: Sized {
    /// The type an argument is evaluated to before conversion.
    fn expected_type() -> Type;

    fn from_dynamic(value: Dynamic) -> EvalResult<Self>;
}

fn mismatch(expected: &str, found: &Dynamic) -> EvalError {
    EvalError::TypeMismatch {
        expected: expected.to_owned(),
        found: found.type_name().to_owned(),
    }
}

impl FromDynamic for i64 {
    fn expected_type() -> Type {
        Type::int()
    }

    fn from_dynamic(value: Dynamic) -> EvalResult<Self> {
        match value {
            Dynamic::Int(n) => Ok(n),
            other => Err(mismatch(INT, &other)),
        }
    }
}

impl FromDynamic for bool {
    fn expected_type() -> Type {
        Type::bool()
    }

    fn from_dynamic(value: Dynamic) -> EvalResult<Self> {
        match value {
            Dynamic::Bool(b) => Ok(b),
            other => Err(mismatch(BOOL, &other)),
        }
    }
}

impl FromDynamic for String {
    fn expected_type() -> Type {
        Type::string()
    }

    fn from_dynamic(value: Dynamic) -> EvalResult<Self> {
        match value {
            Dynamic::Str(s) => Ok(s),
            other => Err(mismatch(STRING, &other)),
        }
    }
}

/// A polymorphic parameter: any value is accepted unchanged.
impl FromDynamic for Dynamic {
    fn expected_type() -> Type {
        Type::var(0)
    }

    fn from_dynamic(value: Dynamic) -> EvalResult<Self> {
        Ok(value)
    }
}

/// A native return type: a value, or a fallible value.
pub trait IntoEvalResult {
    fn into_eval_result(self) -> EvalResult<Dynamic>;
}

macro_rules! impl_into_eval_result {
    ($($ty:ty),+) => {
        $(
            impl IntoEvalResult for $ty {
                fn into_eval_result(self) -> EvalResult<Dynamic> {
                    Ok(Dynamic::from(self))
                }
            }

            impl IntoEvalResult for EvalResult<$ty> {
                fn into_eval_result(self) -> EvalResult<Dynamic> {
                    self.map(Dynamic::from)
                }
            }
        )+
    };
}

impl_into_eval_result!(i64, bool, String, Dynamic);
