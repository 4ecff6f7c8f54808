//! Canonical variable names for display.

use std::fmt;

use crate::traverse::TypeVisitor;
use crate::ty::{Type, TypeVar};

/// Letters for the `index`-th variable: `a` .. `z`, then `ba`, `bb`, ...
///
/// Digits are base 26 with `a` as zero, so `26` is `ba` and not `aa`.
pub fn var_letters(index: u32) -> String {
    let mut digits = Vec::new();
    let mut rest = index;
    loop {
        digits.push(letter(rest % 26));
        rest /= 26;
        if rest == 0 {
            break;
        }
    }
    digits.iter().rev().collect()
}

/// Inverse of [`var_letters`]. `None` unless `name` is non-empty lowercase
/// ASCII that fits in a `u32`.
pub fn letters_var(name: &str) -> Option<u32> {
    if name.is_empty() {
        return None;
    }
    name.bytes().try_fold(0u32, |acc, byte| {
        if !byte.is_ascii_lowercase() {
            return None;
        }
        acc.checked_mul(26)?.checked_add(u32::from(byte - b'a'))
    })
}

fn letter(digit: u32) -> char {
    char::from_digit(digit + 10, 36).unwrap_or('?')
}

/// Variables of a type in order of first appearance.
pub(crate) struct VarNames {
    order: Vec<TypeVar>,
}

impl VarNames {
    pub(crate) fn of(ty: &Type) -> Self {
        let mut names = VarNames { order: Vec::new() };
        names.visit(ty);
        names
    }

    pub(crate) fn order(&self) -> &[TypeVar] {
        &self.order
    }

    pub(crate) fn name(&self, var: TypeVar) -> String {
        match self.order.iter().position(|&seen| seen == var) {
            Some(index) => u32::try_from(index).map_or_else(|_| var.to_string(), var_letters),
            None => var.to_string(),
        }
    }

    pub(crate) fn write_type(&self, f: &mut fmt::Formatter<'_>, ty: &Type) -> fmt::Result {
        match ty {
            Type::Var(var) => f.write_str(&self.name(*var)),
            Type::Const(name) => f.write_str(name),
            Type::Arrow(domain, codomain) => {
                if domain.is_arrow() {
                    f.write_str("(")?;
                    self.write_type(f, domain)?;
                    f.write_str(")")?;
                } else {
                    self.write_type(f, domain)?;
                }
                f.write_str(" -> ")?;
                self.write_type(f, codomain)
            }
        }
    }
}

impl TypeVisitor for VarNames {
    fn visit_var(&mut self, var: TypeVar) {
        if !self.order.contains(&var) {
            self.order.push(var);
        }
    }
}
