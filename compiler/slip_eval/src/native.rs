//! Adapters from plain Rust closures to registry implementations.
//!
//! A closure such as `|a: i64, b: i64| a + b` implements [`NativeFn`] for its
//! parameter tuple. The trait supplies the arity and the parameter types, and
//! unpacks a buffer of evaluated arguments into a typed call.

use smallvec::SmallVec;
use slip_types::Type;

use crate::dynamic::{Dynamic, FromDynamic, IntoEvalResult};
use crate::error::{EvalError, EvalResult};

/// Evaluated arguments of a call, in order.
pub type Args = SmallVec<[Dynamic; 3]>;

/// A native implementation taking evaluated arguments.
pub trait NativeFn<Params>: 'static {
    const ARITY: usize;

    /// The type each argument is evaluated to.
    fn param_types() -> Vec<Type>;

    fn call(&self, args: Args) -> EvalResult<Dynamic>;
}

fn next_arg(args: &mut impl Iterator<Item = Dynamic>, arity: usize, got: usize) -> EvalResult<Dynamic> {
    args.next().ok_or(EvalError::ArityMismatch {
        name: String::new(),
        expected: arity,
        got,
    })
}

macro_rules! impl_native_fn {
    ($arity:literal; $($param:ident $arg:ident $index:literal),+) => {
        impl<F, R, $($param),+> NativeFn<($($param,)+)> for F
        where
            F: Fn($($param),+) -> R + 'static,
            R: IntoEvalResult,
            $($param: FromDynamic,)+
        {
            const ARITY: usize = $arity;

            fn param_types() -> Vec<Type> {
                vec![$($param::expected_type()),+]
            }

            fn call(&self, args: Args) -> EvalResult<Dynamic> {
                let mut args = args.into_iter();
                $(
                    let $arg = $param::from_dynamic(next_arg(&mut args, $arity, $index)?)?;
                )+
                (self)($($arg),+).into_eval_result()
            }
        }
    };
}

impl_native_fn!(1; A a 0);
impl_native_fn!(2; A a 0, B b 1);
impl_native_fn!(3; A a 0, B b 1, C c 2);
