pub mod error;
pub mod lexer;
pub mod parser;
pub mod tree;

pub use error::{SyntaxError, SyntaxResult};
pub use lexer::{lex, Token, TokenKind};
pub use parser::{parse_tokens, Parser};
pub use tree::{Child, Label, Leaf, Operator, ParseTreeNode};

/// Lex and parse `input` into a parse tree.
///
/// The tree borrows number literals from `input`, not from the intermediate
/// token list.
pub fn parse(input: &str) -> SyntaxResult<ParseTreeNode<'_>> {
    let tokens = lex(input)?;
    parse_tokens(&tokens)
}
