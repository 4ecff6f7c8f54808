//! The standard functions.

use slip_types::Type;

use crate::dynamic::Dynamic;
use crate::error::{EvalError, EvalResult};
use crate::registry::Registry;

fn binary(operand: Type, ret: Type) -> Type {
    Type::function([operand.clone(), operand], ret)
}

fn overflow(operation: &'static str) -> EvalError {
    EvalError::IntegerOverflow { operation }
}

pub(crate) fn declare(registry: &mut Registry) {
    arithmetic(registry);
    comparisons(registry);
    logic(registry);
    strings(registry);
    polymorphic(registry);
}

fn arithmetic(registry: &mut Registry) {
    let int2 = || binary(Type::int(), Type::int());
    registry
        .declare_fun("+", int2(), |a: i64, b: i64| {
            a.checked_add(b).ok_or_else(|| overflow("+"))
        })
        .declare_fun("-", int2(), |a: i64, b: i64| {
            a.checked_sub(b).ok_or_else(|| overflow("-"))
        })
        .declare_fun("*", int2(), |a: i64, b: i64| {
            a.checked_mul(b).ok_or_else(|| overflow("*"))
        })
        .declare_fun("/", int2(), |a: i64, b: i64| -> EvalResult<i64> {
            if b == 0 {
                return Err(EvalError::DivisionByZero);
            }
            a.checked_div(b).ok_or_else(|| overflow("/"))
        })
        .declare_fun("%", int2(), |a: i64, b: i64| -> EvalResult<i64> {
            if b == 0 {
                return Err(EvalError::DivisionByZero);
            }
            a.checked_rem(b).ok_or_else(|| overflow("%"))
        });
}

fn comparisons(registry: &mut Registry) {
    let cmp = || binary(Type::int(), Type::bool());
    registry
        .declare_fun("==", cmp(), |a: i64, b: i64| a == b)
        .declare_fun("<=", cmp(), |a: i64, b: i64| a <= b)
        .declare_fun(">=", cmp(), |a: i64, b: i64| a >= b)
        .declare_fun("<", cmp(), |a: i64, b: i64| a < b)
        .declare_fun(">", cmp(), |a: i64, b: i64| a > b)
        .declare_fun("==", binary(Type::bool(), Type::bool()), |a: bool, b: bool| {
            a == b
        })
        .declare_fun(
            "==",
            binary(Type::string(), Type::bool()),
            |a: String, b: String| a == b,
        );
}

fn logic(registry: &mut Registry) {
    registry
        .declare_fun("not", Type::arrow(Type::bool(), Type::bool()), |a: bool| !a)
        .declare_fun("and", binary(Type::bool(), Type::bool()), |a: bool, b: bool| {
            a && b
        })
        .declare_fun("or", binary(Type::bool(), Type::bool()), |a: bool, b: bool| {
            a || b
        });
}

fn strings(registry: &mut Registry) {
    let concat = |a: String, b: String| a + &b;
    registry
        .declare_fun("+s", binary(Type::string(), Type::string()), concat)
        .declare_fun("+", binary(Type::string(), Type::string()), concat);
}

fn polymorphic(registry: &mut Registry) {
    let a = || Type::var(0);
    let b = || Type::var(1);
    registry
        .declare_special(
            "if",
            Type::function([Type::bool(), a(), a()], a()),
            |args| {
                let [cond, then, otherwise] = args else {
                    return Err(EvalError::ArityMismatch {
                        name: "if".to_owned(),
                        expected: 3,
                        got: args.len(),
                    });
                };
                if cond.force_as::<bool>()? {
                    then.force()
                } else {
                    otherwise.force()
                }
            },
        )
        .declare_fun("return", Type::arrow(a(), a()), |x: Dynamic| x)
        .declare_fun(
            "const",
            Type::function([a(), b()], a()),
            |x: Dynamic, _ignored: Dynamic| x,
        );
}
