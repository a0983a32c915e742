//! Concrete parse tree produced by the recursive-descent parser.
//!
//! Each node records which nonterminal produced it and the children of the
//! alternative that matched. Child arity is fixed per alternative:
//!
//! | label        | children                                   |
//! |--------------|--------------------------------------------|
//! | `Expression` | `[Term, A]`                                |
//! | `Term`       | `[Factor, B]`                              |
//! | `A`          | `[op, Term, A]` or `[]`                    |
//! | `B`          | `[op, Factor, B]` or `[]`                  |
//! | `Factor`     | `["(", Expression, ")"]`, `["-", Factor]` or `[number]` |

use std::fmt;

/// Nonterminal that produced a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Expression,
    Term,
    /// Tail of an additive chain, `A` in the grammar.
    SumTail,
    /// Tail of a multiplicative chain, `B` in the grammar.
    ProductTail,
    Factor,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Expression => "Expression",
            Label::Term => "Term",
            Label::SumTail => "A",
            Label::ProductTail => "B",
            Label::Factor => "Factor",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binary operators of the two chain rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add, // "+"
    Sub, // "-"
    Mul, // "*"
    Div, // "/"
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primitive value stored directly in a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leaf<'a> {
    /// Digits exactly as written in the input.
    Number(&'a str),
    Operator(Operator),
    /// The `-` of `Factor := SUB Factor`.
    Negation,
    /// `"("` marker of a parenthesized factor.
    Open,
    /// `")"` marker of a parenthesized factor. The parenthesis itself is
    /// consumed by the `B` that closed the group, not by the factor.
    Close,
}

impl<'a> Leaf<'a> {
    pub fn text(&self) -> &'a str {
        match *self {
            Leaf::Number(text) => text,
            Leaf::Operator(op) => op.as_str(),
            Leaf::Negation => "-",
            Leaf::Open => "(",
            Leaf::Close => ")",
        }
    }
}

impl fmt::Display for Leaf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.text())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child<'a> {
    Node(ParseTreeNode<'a>),
    Leaf(Leaf<'a>),
}

impl<'a> Child<'a> {
    pub fn is_node(&self) -> bool {
        matches!(self, Child::Node(_))
    }

    pub fn as_node(&self) -> Option<&ParseTreeNode<'a>> {
        match self {
            Child::Node(node) => Some(node),
            Child::Leaf(_) => None,
        }
    }
}

impl<'a> From<ParseTreeNode<'a>> for Child<'a> {
    fn from(node: ParseTreeNode<'a>) -> Self {
        Child::Node(node)
    }
}

impl<'a> From<Leaf<'a>> for Child<'a> {
    fn from(leaf: Leaf<'a>) -> Self {
        Child::Leaf(leaf)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTreeNode<'a> {
    pub label: Label,
    pub children: Vec<Child<'a>>,
}

impl<'a> ParseTreeNode<'a> {
    pub fn new(label: Label, children: Vec<Child<'a>>) -> Self {
        Self { label, children }
    }

    /// A node for an empty production.
    pub fn empty(label: Label) -> Self {
        Self::new(label, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Direct sub-tree children, in order.
    pub fn nodes(&self) -> impl Iterator<Item = &ParseTreeNode<'a>> {
        self.children.iter().filter_map(Child::as_node)
    }

    fn write_outline(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{:indent$}{}", "", self.label, indent = depth * 2)?;
        for child in &self.children {
            match child {
                Child::Node(node) => node.write_outline(f, depth + 1)?,
                Child::Leaf(leaf) => writeln!(f, "{:indent$}{}", "", leaf, indent = (depth + 1) * 2)?,
            }
        }
        Ok(())
    }
}

/// Indented outline, one line per node or leaf, leaves quoted.
impl fmt::Display for ParseTreeNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_outline(f, 0)
    }
}
