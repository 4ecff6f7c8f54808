use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::unify::UnifyError;

/// `Bool -> t1 -> t1 -> t1`, the signature of `if`.
fn if_prototype() -> Prototype {
    Prototype::new(Type::arrow(
        Type::bool(),
        Type::arrow(Type::var(1), Type::arrow(Type::var(1), Type::var(1))),
    ))
}

fn int_to_bool() -> Prototype {
    Prototype::new(Type::arrow(Type::int(), Type::bool()))
}

#[test]
fn shows_quantifier_only_when_polymorphic() {
    assert_eq!(if_prototype().show(), "forall a. Bool -> a -> a -> a");
    assert_eq!(int_to_bool().show(), "Int -> Bool");
    assert_eq!(Prototype::int().show(), "Int");
}

#[test]
fn letters_follow_first_appearance() {
    let proto = Prototype::new(Type::function([Type::var(7), Type::var(3)], Type::var(7)));
    assert_eq!(proto.show(), "forall a b. a -> b -> a");
}

#[test]
fn parenthesizes_only_arrow_domains() {
    let higher = Type::arrow(
        Type::arrow(Type::int(), Type::bool()),
        Type::arrow(Type::int(), Type::bool()),
    );
    assert_eq!(Prototype::new(higher).show(), "(Int -> Bool) -> Int -> Bool");
}

#[test]
fn applying_if_to_bool_then_a_function_type() {
    let mut namer = Namer::new();
    let after_cond = if_prototype().apply(&Prototype::bool(), &mut namer).unwrap();
    assert_eq!(after_cond.show(), "forall a. a -> a -> a");

    let after_then = after_cond.apply(&int_to_bool(), &mut namer).unwrap();
    assert_eq!(after_then.show(), "(Int -> Bool) -> Int -> Bool");
    assert!(after_then.is_mono());
}

#[test]
fn applying_if_to_int_is_a_unification_error() {
    let mut namer = Namer::new();
    let err = if_prototype().apply(&Prototype::int(), &mut namer).unwrap_err();
    assert!(matches!(
        err,
        TypeError::Unification(UnifyError::ConstMismatch { .. })
    ));
}

#[test]
fn applying_a_non_function_fails() {
    let mut namer = Namer::new();
    let err = Prototype::int().apply(&Prototype::int(), &mut namer).unwrap_err();
    assert!(matches!(err, TypeError::NotAFunction { .. }));
}

#[test]
fn const_keeps_the_first_argument_type() {
    let konst = Prototype::new(Type::function([Type::var(0), Type::var(1)], Type::var(0)));
    let mut namer = Namer::new();
    let applied = konst
        .apply_all([&Prototype::string(), &Prototype::int()], &mut namer)
        .unwrap();
    assert_eq!(applied, Prototype::string());
}

#[test]
fn partial_application_stays_polymorphic() {
    let konst = Prototype::new(Type::function([Type::var(0), Type::var(1)], Type::var(0)));
    let mut namer = Namer::new();
    let applied = konst.apply(&Prototype::int(), &mut namer).unwrap();
    assert_eq!(applied.show(), "forall a. a -> Int");
    assert_eq!(applied.arity(), 1);
}

#[test]
fn instantiate_leaves_monomorphic_prototypes_alone() {
    let mut namer = Namer::new();
    assert_eq!(int_to_bool().instantiate(&mut namer), int_to_bool());
    assert_eq!(namer.peek(), 0);
}

#[test]
fn vars_track_the_type() {
    let proto = if_prototype();
    assert_eq!(proto.vars().iter().copied().collect::<Vec<_>>(), vec![TypeVar(1)]);
    assert!(proto.is_function());
    assert_eq!(proto.arity(), 3);
}

#[test]
fn canonical_renumbers_by_appearance() {
    let proto = Prototype::new(Type::function([Type::var(9), Type::var(4)], Type::var(9)));
    let expected = Prototype::new(Type::function([Type::var(0), Type::var(1)], Type::var(0)));
    assert_eq!(proto.canonical(), expected);
}

#[test]
fn letters_are_base_26() {
    assert_eq!(var_letters(0), "a");
    assert_eq!(var_letters(25), "z");
    assert_eq!(var_letters(26), "ba");
    assert_eq!(var_letters(27), "bb");
    assert_eq!(letters_var("ba"), Some(26));
    assert_eq!(letters_var("a"), Some(0));
    assert_eq!(letters_var("Int"), None);
    assert_eq!(letters_var(""), None);
}

fn any_type() -> impl Strategy<Value = Type> {
    let leaf = prop_oneof![
        (0u32..4).prop_map(Type::var),
        prop_oneof![Just(Type::int()), Just(Type::bool()), Just(Type::string())],
    ];
    leaf.prop_recursive(4, 24, 2, |inner| {
        (inner.clone(), inner).prop_map(|(domain, codomain)| Type::arrow(domain, codomain))
    })
}

proptest! {
    #[test]
    fn instantiations_share_shape_but_not_variables(ty in any_type()) {
        let proto = Prototype::new(ty);
        let mut namer = Namer::starting_at(100);
        let first = proto.instantiate(&mut namer);
        let second = proto.instantiate(&mut namer);

        prop_assert_eq!(first.show(), second.show());
        prop_assert!(first.same_shape(&second));
        prop_assert!(first.vars().is_disjoint(second.vars()));
        prop_assert_eq!(first.vars().len(), proto.vars().len());
    }

    #[test]
    fn letters_round_trip(index in 0u32..100_000) {
        prop_assert_eq!(letters_var(&var_letters(index)), Some(index));
    }
}
