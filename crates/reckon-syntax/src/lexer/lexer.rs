use super::token::*;
use crate::{SyntaxError, SyntaxResult};
use logos::Logos;
use miette::SourceSpan;

/// Lexes the input string into a vector of tokens.
///
/// Lexing stops at the first character no pattern accepts; the error carries
/// the rest of the input from that point on.
pub fn lex(input: &str) -> SyntaxResult<Vec<Token<'_>>> {
    let mut lexer = TokenKind::lexer(input);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        let range = lexer.span();

        match kind {
            TokenKind::Error => {
                let remainder = &input[range.start..];
                return Err(SyntaxError::LexError {
                    unconsumed_remainder: remainder.to_string(),
                    span: SourceSpan::new(range.start.into(), remainder.len()),
                });
            }
            _ => {
                tokens.push(Token {
                    kind,
                    text: &input[range.clone()],
                    span: SourceSpan::new(range.start.into(), range.len()),
                });
            }
        }
    }

    log::debug!("lexed {} tokens from {} bytes", tokens.len(), input.len());
    Ok(tokens)
}
