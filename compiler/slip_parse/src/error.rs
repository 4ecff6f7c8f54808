//! Parse errors.

use crate::span::Span;

pub type ParseResult<T> = Result<T, ParseError>;

/// Why a piece of text is not an expression or a signature.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("nothing to parse")]
    EmptyInput { span: Span },

    #[error("unclosed `(` opened at {open}")]
    UnclosedList { open: Span },

    #[error("unexpected `)` at {span}")]
    UnexpectedCloseParen { span: Span },

    #[error("unterminated string literal starting at {span}")]
    UnterminatedString { span: Span },

    #[error("integer literal `{text}` at {span} does not fit in 64 bits")]
    IntegerOutOfRange { text: String, span: Span },

    #[error("unexpected input `{found}` at {span} after a complete expression")]
    TrailingInput { found: String, span: Span },

    /// A character no token starts with.
    #[error("unexpected character `{found}` at {span}")]
    UnexpectedChar { found: String, span: Span },

    /// Signature grammar only: a token that cannot appear here.
    #[error("expected {expected}, found `{found}` at {span}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        span: Span,
    },

    /// Signature grammar only: the input stopped mid-type.
    #[error("expected {expected} at end of input")]
    UnexpectedEnd { expected: &'static str, span: Span },

    /// A lowercase type name that is not made of letters `a`..`z` alone.
    #[error("`{name}` at {span} is not a type variable name")]
    InvalidTypeVariable { name: String, span: Span },
}

impl ParseError {
    /// Where in the source the error was found.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnclosedList { open: span }
            | ParseError::EmptyInput { span }
            | ParseError::UnexpectedCloseParen { span }
            | ParseError::UnterminatedString { span }
            | ParseError::IntegerOutOfRange { span, .. }
            | ParseError::TrailingInput { span, .. }
            | ParseError::UnexpectedChar { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedEnd { span, .. }
            | ParseError::InvalidTypeVariable { span, .. } => *span,
        }
    }
}
