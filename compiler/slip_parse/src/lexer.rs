//! Tokenizer for S-expressions, built on logos.
//!
//! Only four shapes of token exist: parentheses, quoted strings and atoms.
//! Whether an atom is an integer, a boolean or a symbol is decided by the
//! parser, so the lexer never has to arbitrate between overlapping regexes.

use logos::Logos;

use crate::error::{ParseError, ParseResult};
use crate::span::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[regex(r#""([^"\\]|\\.)*""#)]
    Str,

    /// Maximal run of anything but whitespace, parentheses and quotes.
    #[regex(r#"[^ \t\r\n()"]+"#)]
    Atom,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum TokenKind {
    LParen,
    RParen,
    /// String contents with escapes resolved.
    Str(String),
    Atom(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Split `source` into tokens.
pub(crate) fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(raw) = lexer.next() {
        let span = Span::from(lexer.span());
        let slice = lexer.slice();
        let kind = match raw {
            Ok(RawToken::LParen) => TokenKind::LParen,
            Ok(RawToken::RParen) => TokenKind::RParen,
            Ok(RawToken::Str) => {
                let content = &slice[1..slice.len() - 1];
                TokenKind::Str(unescape_string(content))
            }
            Ok(RawToken::Atom) => TokenKind::Atom(slice.to_owned()),
            // Every other character is part of some atom, so only a quote
            // that never closes ends up here.
            Err(()) if slice.starts_with('"') => {
                return Err(ParseError::UnterminatedString {
                    span: Span::new(span.start, source.len()),
                });
            }
            Err(()) => {
                return Err(ParseError::UnexpectedChar {
                    found: slice.to_owned(),
                    span,
                });
            }
        };
        tokens.push(Token { kind, span });
    }

    Ok(tokens)
}

/// Resolve `\"`, `\\`, `\n` and `\t`. Other escapes are kept literally.
pub(crate) fn unescape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => result.push('"'),
            Some('\\') => result.push('\\'),
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    result
}
