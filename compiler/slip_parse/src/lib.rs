//! Parser for slip source text.
//!
//! Expressions are S-expressions:
//!
//! ```text
//! expr := '(' expr* ')' | string | atom
//! ```
//!
//! An atom is a maximal run of characters other than whitespace, parentheses
//! and `"`. The atoms `true` and `false` are booleans and an atom that is an
//! optionally negative run of decimal digits is an integer. Strings are
//! double-quoted and understand the escapes `\"`, `\\`, `\n` and `\t`.
//!
//! The same crate parses type signatures (`Bool -> a -> a -> a`), used by the
//! command line to experiment with the type engine.

mod error;
mod lexer;
mod parser;
mod signature;
mod span;

pub use error::{ParseError, ParseResult};
pub use span::Span;

use slip_ir::Value;
use slip_types::{Prototype, Type};

use crate::parser::Parser;

/// Parse exactly one expression.
#[tracing::instrument(level = "trace", skip_all)]
pub fn parse(source: &str) -> ParseResult<Value> {
    let tokens = lexer::tokenize(source)?;
    let mut parser = Parser::new(&tokens, source.len());
    let expr = parser.expr()?;
    parser.expect_end()?;
    Ok(expr)
}

/// Parse every top-level expression in `source`, in order.
///
/// Blank input yields an empty vector rather than an error.
#[tracing::instrument(level = "trace", skip_all)]
pub fn parse_all(source: &str) -> ParseResult<Vec<Value>> {
    let tokens = lexer::tokenize(source)?;
    let mut parser = Parser::new(&tokens, source.len());
    let mut exprs = Vec::new();
    while !parser.at_end() {
        exprs.push(parser.expr()?);
    }
    Ok(exprs)
}

/// Parse a type such as `(Int -> Bool) -> Int -> Bool`.
pub fn parse_type(source: &str) -> ParseResult<Type> {
    signature::parse_type(source)
}

/// Parse a type and generalize it over its variables.
pub fn parse_signature(source: &str) -> ParseResult<Prototype> {
    parse_type(source).map(Prototype::new)
}
