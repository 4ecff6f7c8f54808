//! Type phase tests.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use slip_eval::Registry;
use slip_types::{bind, Namer, Prototype, Type, TypeError, UnifyError};

use crate::common::{check_source, type_ok};

fn if_prototype() -> Prototype {
    let a = Type::var(1);
    Prototype::new(Type::arrow(
        Type::bool(),
        Type::arrow(a.clone(), Type::arrow(a.clone(), a)),
    ))
}

#[test]
fn if_prototype_shows_generalized() {
    assert_eq!(if_prototype().show(), "forall a. Bool -> a -> a -> a");
}

#[test]
fn applying_if_prototype() {
    let mut namer = Namer::new();
    let cond = if_prototype().apply(&Prototype::bool(), &mut namer).unwrap();
    assert_eq!(cond.show(), "forall a. a -> a -> a");

    let pred = Prototype::new(Type::arrow(Type::int(), Type::bool()));
    let branch = cond.apply(&pred, &mut namer).unwrap();
    assert_eq!(branch.show(), "(Int -> Bool) -> Int -> Bool");
}

#[test]
fn applying_if_prototype_to_int_fails() {
    let err = if_prototype()
        .apply(&Prototype::int(), &mut Namer::new())
        .unwrap_err();
    assert!(
        matches!(err, TypeError::Unification(UnifyError::ConstMismatch { .. })),
        "{err:?}"
    );
}

#[test]
fn const_of_string_and_int_is_string() {
    assert_eq!(type_ok("(const \"yolo\" 42)"), "String");
}

#[test]
fn saturated_builtins_show_their_result() {
    for (source, expected) in [
        ("(+ 1 2)", "Int"),
        ("(- 1 2)", "Int"),
        ("(* 1 2)", "Int"),
        ("(/ 1 2)", "Int"),
        ("(% 1 2)", "Int"),
        ("(< 1 2)", "Bool"),
        ("(== true false)", "Bool"),
        ("(== \"a\" \"b\")", "Bool"),
        ("(and true false)", "Bool"),
        ("(not true)", "Bool"),
        ("(+s \"a\" \"b\")", "String"),
        ("(+ \"a\" \"b\")", "String"),
        ("(if true 1 2)", "Int"),
        ("(return false)", "Bool"),
    ] {
        assert_eq!(type_ok(source), expected, "{source}");
    }
}

#[test]
fn every_registered_function_is_typed_when_saturated() {
    let registry = Registry::with_builtins();
    for function in registry.iter() {
        let params = function.signature().ty().params();
        let args: Vec<Prototype> = params
            .iter()
            .map(|param| match param {
                Type::Var(_) => Prototype::int(),
                other => Prototype::new((*other).clone()),
            })
            .collect();
        let applied = function
            .signature()
            .apply_all(&args, &mut Namer::new())
            .unwrap();
        assert!(!applied.is_function(), "{}", function.key());
    }
}

#[test]
fn checker_errors() {
    assert!(matches!(
        check_source("(nope 1)").unwrap_err(),
        TypeError::UnknownFunction { .. }
    ));
    assert!(matches!(
        check_source("(not 1)").unwrap_err(),
        TypeError::Unification(UnifyError::ConstMismatch { .. })
    ));
    assert!(matches!(
        check_source("(== 1 \"a\")").unwrap_err(),
        TypeError::NoMatchingOverload { .. }
    ));
}

#[test]
fn partial_application_types() {
    assert_eq!(type_ok("(+ 1)"), "Int -> Int");
    assert_eq!(type_ok("(const 1)"), "forall a. a -> Int");
    assert_eq!(type_ok("((+ 1) 2)"), "Int");
}

fn ground() -> impl Strategy<Value = Type> {
    let leaf = prop_oneof![Just(Type::int()), Just(Type::bool()), Just(Type::string())];
    leaf.prop_recursive(4, 16, 2, |inner| {
        (inner.clone(), inner).prop_map(|(domain, codomain)| Type::arrow(domain, codomain))
    })
}

proptest! {
    #[test]
    fn ground_types_bind_to_themselves(ty in ground()) {
        prop_assert!(bind(&ty, &ty).unwrap().is_empty());
    }

    #[test]
    fn distinct_constants_do_not_bind(a in "[A-Z][a-z]{1,4}", b in "[A-Z][a-z]{1,4}") {
        prop_assume!(a != b);
        prop_assert!(bind(&Type::constant(a), &Type::constant(b)).is_err());
    }

    #[test]
    fn instantiations_are_fresh(ty in ground()) {
        let proto = Prototype::new(Type::arrow(Type::var(0), Type::arrow(ty, Type::var(1))));
        let mut namer = Namer::new();
        let first = proto.instantiate(&mut namer);
        let second = proto.instantiate(&mut namer);
        prop_assert!(first.same_shape(&second));
        prop_assert!(first.vars().is_disjoint(second.vars()));
    }
}
