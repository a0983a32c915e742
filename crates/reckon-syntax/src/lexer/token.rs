use logos::Logos;
use miette::SourceSpan;

/// A token spans from `span.offset()` for `span.len()` bytes of the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: SourceSpan,
}

/// Every pattern starts with a distinct character, so the first match is the only match.
#[derive(Debug, Logos, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    #[regex(r"[0-9]+")]
    Number,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // Anything else, whitespace included
    #[error]
    Error,
}

impl TokenKind {
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Error => "unrecognised input",
        }
    }
}
