use crate::lexer::{Token, TokenKind};
use crate::tree::*;
use crate::{SyntaxError, SyntaxResult};
use miette::SourceSpan;

/// Our hand-rolled parser structure.
///
/// Besides the cursor it tracks parenthesized groups. A `(` is opened by
/// `Factor`, but its `)` is consumed by whichever `B` reaches it first; from
/// then until control returns to that factor, every `A` and `B` takes its
/// empty production.
pub struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
    /// Byte offset just past the last token, used for end-of-input spans.
    end: usize,
    open_groups: usize,
    group_closed: bool,
}

impl<'t, 'a> Parser<'t, 'a> {
    pub fn new(tokens: &'t [Token<'a>]) -> Self {
        let end = tokens
            .last()
            .map(|t| t.span.offset() + t.span.len())
            .unwrap_or(0);
        Self {
            tokens,
            pos: 0,
            end,
            open_groups: 0,
            group_closed: false,
        }
    }

    /// Peek at the current token without consuming it.
    pub fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    /// Consume and return the current token.
    pub fn take(&mut self) -> SyntaxResult<Token<'a>> {
        let tok = self.peek().ok_or_else(|| {
            SyntaxError::parse("unexpected end of input", SourceSpan::new(self.end.into(), 0))
        })?;
        self.pos += 1;
        Ok(tok)
    }

    /// Whether every token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    //--------------------------------------------------------------------------
    // Expression ::= Term A
    //--------------------------------------------------------------------------

    pub fn parse_expression(&mut self) -> SyntaxResult<ParseTreeNode<'a>> {
        let term = self.parse_term()?;
        let tail = self.parse_sum_tail()?;
        Ok(ParseTreeNode::new(Label::Expression, vec![term.into(), tail.into()]))
    }

    //--------------------------------------------------------------------------
    // Term ::= Factor B
    //--------------------------------------------------------------------------

    pub fn parse_term(&mut self) -> SyntaxResult<ParseTreeNode<'a>> {
        let factor = self.parse_factor()?;
        let tail = self.parse_product_tail()?;
        Ok(ParseTreeNode::new(Label::Term, vec![factor.into(), tail.into()]))
    }

    //--------------------------------------------------------------------------
    // A ::= ("+" | "-") Term A
    //     | <empty>
    //--------------------------------------------------------------------------

    pub fn parse_sum_tail(&mut self) -> SyntaxResult<ParseTreeNode<'a>> {
        if self.group_closed {
            return Ok(ParseTreeNode::empty(Label::SumTail));
        }

        let op = match self.peek().map(|t| t.kind) {
            Some(TokenKind::Plus) => Operator::Add,
            Some(TokenKind::Minus) => Operator::Sub,
            _ => return Ok(ParseTreeNode::empty(Label::SumTail)),
        };
        self.take()?;

        let term = self.parse_term()?;
        let tail = self.parse_sum_tail()?;
        Ok(ParseTreeNode::new(
            Label::SumTail,
            vec![Leaf::Operator(op).into(), term.into(), tail.into()],
        ))
    }

    //--------------------------------------------------------------------------
    // B ::= ("*" | "/") Factor B
    //     | ")"
    //     | <empty>
    //--------------------------------------------------------------------------

    pub fn parse_product_tail(&mut self) -> SyntaxResult<ParseTreeNode<'a>> {
        if self.group_closed {
            return Ok(ParseTreeNode::empty(Label::ProductTail));
        }

        let op = match self.peek() {
            Some(tok) if tok.kind == TokenKind::Star => Operator::Mul,
            Some(tok) if tok.kind == TokenKind::Slash => Operator::Div,
            Some(tok) if tok.kind == TokenKind::RParen => {
                self.close_group(tok)?;
                return Ok(ParseTreeNode::empty(Label::ProductTail));
            }
            _ => return Ok(ParseTreeNode::empty(Label::ProductTail)),
        };
        self.take()?;

        let factor = self.parse_factor()?;
        let tail = self.parse_product_tail()?;
        Ok(ParseTreeNode::new(
            Label::ProductTail,
            vec![Leaf::Operator(op).into(), factor.into(), tail.into()],
        ))
    }

    /// Consume the `)` of the innermost open group.
    fn close_group(&mut self, rparen: Token<'a>) -> SyntaxResult<()> {
        if self.open_groups == 0 {
            return Err(SyntaxError::parse("unmatched `)`", rparen.span));
        }
        self.take()?;
        self.open_groups -= 1;
        self.group_closed = true;
        Ok(())
    }

    //--------------------------------------------------------------------------
    // Factor ::= "(" Expression ")"
    //          | "-" Factor
    //          | <number>
    //--------------------------------------------------------------------------

    pub fn parse_factor(&mut self) -> SyntaxResult<ParseTreeNode<'a>> {
        let tok = self.take()?;

        match tok.kind {
            TokenKind::LParen => {
                self.open_groups += 1;
                let expression = self.parse_expression()?;
                if !self.group_closed {
                    return Err(SyntaxError::parse("unclosed `(`", tok.span));
                }
                self.group_closed = false;
                Ok(ParseTreeNode::new(
                    Label::Factor,
                    vec![Leaf::Open.into(), expression.into(), Leaf::Close.into()],
                ))
            }
            TokenKind::Minus => {
                let operand = self.parse_factor()?;
                Ok(ParseTreeNode::new(
                    Label::Factor,
                    vec![Leaf::Negation.into(), operand.into()],
                ))
            }
            TokenKind::Number => Ok(ParseTreeNode::new(
                Label::Factor,
                vec![Leaf::Number(tok.text).into()],
            )),
            other => Err(SyntaxError::parse(
                format!("expected a number, `(` or `-`, found {}", other.describe()),
                tok.span,
            )),
        }
    }
}

//------------------------------------------------------------------------------
// Public entry point for the parser.
//------------------------------------------------------------------------------

/// Parse a complete expression from the list of tokens.
///
/// Every token must belong to the expression; anything left over after the
/// root `Expression` is an error.
pub fn parse_tokens<'a>(tokens: &[Token<'a>]) -> SyntaxResult<ParseTreeNode<'a>> {
    let mut parser = Parser::new(tokens);
    let root = parser.parse_expression()?;

    if let Some(tok) = parser.peek() {
        return Err(SyntaxError::parse(
            format!("unexpected trailing {}", tok.kind.describe()),
            tok.span,
        ));
    }

    log::debug!(
        "parsed {} tokens into a tree of {} nodes",
        tokens.len(),
        count_nodes(&root)
    );
    Ok(root)
}

fn count_nodes(node: &ParseTreeNode<'_>) -> usize {
    1 + node.nodes().map(count_nodes).sum::<usize>()
}
