//! Recursive descent over the token stream.

use slip_ir::Value;
use slip_stack::ensure_sufficient_stack;

use crate::error::{ParseError, ParseResult};
use crate::lexer::{Token, TokenKind};
use crate::span::Span;

pub(crate) struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    /// Length of the source, for spans past the last token.
    end: usize,
}

impl<'t> Parser<'t> {
    pub(crate) fn new(tokens: &'t [Token], end: usize) -> Self {
        Parser { tokens, pos: 0, end }
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Fail with `TrailingInput` unless every token was consumed.
    pub(crate) fn expect_end(&self) -> ParseResult<()> {
        match self.tokens.get(self.pos) {
            None => Ok(()),
            Some(token) => Err(ParseError::TrailingInput {
                found: describe(&token.kind),
                span: token.span,
            }),
        }
    }

    /// Parse one expression.
    pub(crate) fn expr(&mut self) -> ParseResult<Value> {
        ensure_sufficient_stack(|| self.expr_inner())
    }

    fn expr_inner(&mut self) -> ParseResult<Value> {
        let tokens = self.tokens;
        let Some(token) = tokens.get(self.pos) else {
            return Err(ParseError::EmptyInput {
                span: Span::point(self.end),
            });
        };
        self.pos += 1;

        match &token.kind {
            TokenKind::LParen => self.list(token.span),
            TokenKind::RParen => Err(ParseError::UnexpectedCloseParen { span: token.span }),
            TokenKind::Str(text) => Ok(Value::Str(text.clone())),
            TokenKind::Atom(text) => classify_atom(text, token.span),
        }
    }

    /// The rest of a list whose `(` was at `open`.
    fn list(&mut self, open: Span) -> ParseResult<Value> {
        let mut items = Vec::new();
        loop {
            match self.tokens.get(self.pos) {
                None => return Err(ParseError::UnclosedList { open }),
                Some(Token {
                    kind: TokenKind::RParen,
                    ..
                }) => {
                    self.pos += 1;
                    return Ok(Value::List(items));
                }
                Some(_) => items.push(self.expr()?),
            }
        }
    }
}

/// Decide what a bare atom denotes: `true`, `false`, an integer, or a symbol.
fn classify_atom(text: &str, span: Span) -> ParseResult<Value> {
    match text {
        "true" => Ok(Value::Bool(true)),
        "false" => Ok(Value::Bool(false)),
        _ if is_integer(text) => {
            text.parse::<i64>()
                .map(Value::Int)
                .map_err(|_| ParseError::IntegerOutOfRange {
                    text: text.to_owned(),
                    span,
                })
        }
        _ => Ok(Value::Atom(text.to_owned())),
    }
}

/// Optionally negative run of decimal digits. A lone `-` is a symbol.
fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}

fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::LParen => "(".to_owned(),
        TokenKind::RParen => ")".to_owned(),
        TokenKind::Str(text) => format!("{text:?}"),
        TokenKind::Atom(text) => text.clone(),
    }
}
