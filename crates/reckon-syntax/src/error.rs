use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Lex error: no token matches at {unconsumed_remainder:?}")]
    #[diagnostic(code(reckon_syntax::lex_error))]
    LexError {
        /// Everything from the first unrecognised character to the end of input.
        unconsumed_remainder: String,
        #[label("unrecognised input starts here")]
        span: SourceSpan,
    },

    #[error("Parse error: {reason}")]
    #[diagnostic(code(reckon_syntax::parse_error))]
    ParseError {
        reason: String,
        #[label("{reason}")]
        span: SourceSpan,
    },
}

impl SyntaxError {
    pub fn span(&self) -> SourceSpan {
        match self {
            SyntaxError::LexError { span, .. } | SyntaxError::ParseError { span, .. } => *span,
        }
    }

    pub(crate) fn parse(reason: impl Into<String>, span: SourceSpan) -> Self {
        SyntaxError::ParseError {
            reason: reason.into(),
            span,
        }
    }
}

/// Result type for lexing and parsing
pub type SyntaxResult<T> = std::result::Result<T, SyntaxError>;
