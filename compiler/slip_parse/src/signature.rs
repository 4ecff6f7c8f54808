//! Type signatures such as `Bool -> a -> a -> a`.
//!
//! ```text
//! signature := operand ('->' signature)?
//! operand   := name | '(' signature ')'
//! ```
//!
//! A name starting with a lowercase letter is a type variable whose id is its
//! base-26 letter value (`a` is 0, `ba` is 26). Any other name is a constant.

use logos::Logos;
use slip_stack::ensure_sufficient_stack;
use slip_types::{letters_var, Type};

use crate::error::{ParseError, ParseResult};
use crate::span::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum SigToken {
    #[token("->")]
    Arrow,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[regex(r"[A-Za-z][A-Za-z0-9_]*")]
    Name,
}

struct Lexeme<'src> {
    token: SigToken,
    text: &'src str,
    span: Span,
}

pub(crate) fn parse_type(source: &str) -> ParseResult<Type> {
    let mut lexemes = Vec::new();
    let mut lexer = SigToken::lexer(source);
    while let Some(token) = lexer.next() {
        let span = Span::from(lexer.span());
        let text = lexer.slice();
        match token {
            Ok(token) => lexemes.push(Lexeme { token, text, span }),
            Err(()) => {
                return Err(ParseError::UnexpectedChar {
                    found: text.to_owned(),
                    span,
                });
            }
        }
    }

    if lexemes.is_empty() {
        return Err(ParseError::EmptyInput {
            span: Span::point(source.len()),
        });
    }

    let mut parser = SigParser {
        lexemes: &lexemes,
        pos: 0,
        end: source.len(),
    };
    let ty = parser.signature()?;
    match lexemes.get(parser.pos) {
        None => Ok(ty),
        Some(extra) => Err(ParseError::TrailingInput {
            found: extra.text.to_owned(),
            span: extra.span,
        }),
    }
}

struct SigParser<'l, 'src> {
    lexemes: &'l [Lexeme<'src>],
    pos: usize,
    end: usize,
}

impl SigParser<'_, '_> {
    fn signature(&mut self) -> ParseResult<Type> {
        ensure_sufficient_stack(|| {
            let domain = self.operand()?;
            if self.eat(SigToken::Arrow) {
                let codomain = self.signature()?;
                Ok(Type::arrow(domain, codomain))
            } else {
                Ok(domain)
            }
        })
    }

    fn operand(&mut self) -> ParseResult<Type> {
        let lexemes = self.lexemes;
        let Some(lexeme) = lexemes.get(self.pos) else {
            return Err(ParseError::UnexpectedEnd {
                expected: "a type",
                span: Span::point(self.end),
            });
        };
        self.pos += 1;

        match lexeme.token {
            SigToken::Name => name_type(lexeme.text, lexeme.span),
            SigToken::LParen => {
                let inner = self.signature()?;
                if self.eat(SigToken::RParen) {
                    Ok(inner)
                } else {
                    Err(self.unexpected("`)`"))
                }
            }
            SigToken::Arrow | SigToken::RParen => Err(ParseError::UnexpectedToken {
                expected: "a type",
                found: lexeme.text.to_owned(),
                span: lexeme.span,
            }),
        }
    }

    fn eat(&mut self, token: SigToken) -> bool {
        let found = self
            .lexemes
            .get(self.pos)
            .is_some_and(|lexeme| lexeme.token == token);
        if found {
            self.pos += 1;
        }
        found
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        match self.lexemes.get(self.pos) {
            Some(lexeme) => ParseError::UnexpectedToken {
                expected,
                found: lexeme.text.to_owned(),
                span: lexeme.span,
            },
            None => ParseError::UnexpectedEnd {
                expected,
                span: Span::point(self.end),
            },
        }
    }
}

fn name_type(name: &str, span: Span) -> ParseResult<Type> {
    if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
        return Ok(Type::constant(name));
    }
    letters_var(name)
        .map(Type::var)
        .ok_or_else(|| ParseError::InvalidTypeVariable {
            name: name.to_owned(),
            span,
        })
}
