use reckon_syntax::{Leaf, Operator};
use std::collections::VecDeque;
use std::fmt;

/// One entry of the linearized sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol<'a> {
    /// Numeric literal, still as written.
    Number(&'a str),
    /// Binary operator; pops two operands.
    Operator(Operator),
    /// Unary minus; pops one operand.
    Negate,
}

impl<'a> Symbol<'a> {
    /// The symbol a leaf contributes, or `None` for parenthesis markers.
    pub fn from_leaf(leaf: &Leaf<'a>) -> Option<Self> {
        match *leaf {
            Leaf::Number(text) => Some(Symbol::Number(text)),
            Leaf::Operator(op) => Some(Symbol::Operator(op)),
            Leaf::Negation => Some(Symbol::Negate),
            Leaf::Open | Leaf::Close => None,
        }
    }
}

impl fmt::Display for Symbol<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Number(text) => f.write_str(text),
            Symbol::Operator(op) => write!(f, "{}", op),
            Symbol::Negate => f.write_str("neg"),
        }
    }
}

/// Linearized operands and operators, filled by one traversal and drained
/// front first by one fold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationStack<'a> {
    symbols: VecDeque<Symbol<'a>>,
}

impl<'a> EvaluationStack<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, symbol: Symbol<'a>) {
        self.symbols.push_back(symbol);
    }

    /// Remove the oldest symbol.
    pub fn pop_front(&mut self) -> Option<Symbol<'a>> {
        self.symbols.pop_front()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<'a> FromIterator<Symbol<'a>> for EvaluationStack<'a> {
    fn from_iter<I: IntoIterator<Item = Symbol<'a>>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

/// Space-separated postfix form, e.g. `2 3 * 1 +`.
impl fmt::Display for EvaluationStack<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for symbol in &self.symbols {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", symbol)?;
            first = false;
        }
        Ok(())
    }
}
