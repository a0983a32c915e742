//! First evaluation pass: flatten a parse tree into postfix order.
//!
//! At every node the children are visited sub-trees first, then leaves,
//! keeping the relative order inside each group. For `Term = [Factor, B]` and
//! `B = [op, Factor, B]` that puts each operator after both of its operands,
//! so `10/2/5` becomes `10 2 5 / /` and folds right to left.
//!
//! Additive chains are the exception: `A = [op, Term, A]` is visited as
//! `Term, op, A`, which folds `1-2+3` left to right as `1 2 - 3 +`.

use crate::stack::{EvaluationStack, Symbol};
use reckon_syntax::{Child, Label, ParseTreeNode};

/// Flatten `root` into an evaluation stack.
pub fn linearize<'a>(root: &ParseTreeNode<'a>) -> EvaluationStack<'a> {
    let mut stack = EvaluationStack::new();
    visit(root, &mut stack);
    stack
}

fn visit<'a>(node: &ParseTreeNode<'a>, stack: &mut EvaluationStack<'a>) {
    for child in visit_order(node) {
        match child {
            Child::Node(sub) => visit(sub, stack),
            Child::Leaf(leaf) => {
                if let Some(symbol) = Symbol::from_leaf(leaf) {
                    stack.push(symbol);
                }
            }
        }
    }
}

/// The order in which `visit` walks the children of `node`.
pub fn visit_order<'n, 'a>(node: &'n ParseTreeNode<'a>) -> Vec<&'n Child<'a>> {
    match (node.label, node.children.as_slice()) {
        (Label::SumTail, [op, term, tail]) => vec![term, op, tail],
        (_, children) => subtrees_then_leaves(children),
    }
}

fn subtrees_then_leaves<'n, 'a>(children: &'n [Child<'a>]) -> Vec<&'n Child<'a>> {
    let (mut ordered, leaves): (Vec<_>, Vec<_>) = children.iter().partition(|c| c.is_node());
    ordered.extend(leaves);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use reckon_syntax::{parse, Leaf, Operator};

    fn postfix(input: &str) -> String {
        let tree = parse(input).unwrap();
        linearize(&tree).to_string()
    }

    #[test]
    fn test_subtrees_before_leaves() {
        let inner = ParseTreeNode::new(Label::Factor, vec![Leaf::Number("5").into()]);
        let tail = ParseTreeNode::empty(Label::ProductTail);
        let node = ParseTreeNode::new(
            Label::ProductTail,
            vec![Leaf::Operator(Operator::Mul).into(), inner.clone().into(), tail.clone().into()],
        );

        let order = visit_order(&node);
        assert_eq!(
            order,
            vec![
                &Child::Node(inner),
                &Child::Node(tail),
                &Child::Leaf(Leaf::Operator(Operator::Mul)),
            ]
        );
    }

    #[test]
    fn test_partition_keeps_relative_order() {
        let a = ParseTreeNode::new(Label::Factor, vec![Leaf::Number("1").into()]);
        let b = ParseTreeNode::new(Label::Factor, vec![Leaf::Number("2").into()]);
        let node = ParseTreeNode::new(
            Label::Factor,
            vec![Leaf::Open.into(), a.clone().into(), Leaf::Close.into(), b.clone().into()],
        );

        let order = visit_order(&node);
        assert_eq!(
            order,
            vec![
                &Child::Node(a),
                &Child::Node(b),
                &Child::Leaf(Leaf::Open),
                &Child::Leaf(Leaf::Close),
            ]
        );
    }

    #[test]
    fn test_sum_tail_puts_operator_after_its_term() {
        let term = ParseTreeNode::new(Label::Term, vec![]);
        let tail = ParseTreeNode::empty(Label::SumTail);
        let node = ParseTreeNode::new(
            Label::SumTail,
            vec![Leaf::Operator(Operator::Sub).into(), term.clone().into(), tail.clone().into()],
        );

        let order = visit_order(&node);
        assert_eq!(
            order,
            vec![
                &Child::Node(term),
                &Child::Leaf(Leaf::Operator(Operator::Sub)),
                &Child::Node(tail),
            ]
        );
    }

    #[test]
    fn test_empty_node_contributes_nothing() {
        let stack = linearize(&ParseTreeNode::empty(Label::SumTail));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_linearize_sum_and_product() {
        assert_eq!(postfix("2+3"), "2 3 +");
        assert_eq!(postfix("2*3+1"), "2 3 * 1 +");
        assert_eq!(postfix("1+2*3"), "1 2 3 * +");
    }

    #[test]
    fn test_linearize_chains() {
        assert_eq!(postfix("10-5-2"), "10 5 - 2 -");
        assert_eq!(postfix("10/2/5"), "10 2 5 / /");
        assert_eq!(postfix("8/4*2"), "8 4 2 * /");
    }

    #[test]
    fn test_linearize_drops_paren_markers() {
        assert_eq!(postfix("(1+2)*3"), "1 2 + 3 *");
        assert_eq!(postfix("((7))"), "7");
    }

    #[test]
    fn test_linearize_negation() {
        assert_eq!(postfix("-5+3"), "5 neg 3 +");
        assert_eq!(postfix("2*-3"), "2 3 neg *");
        assert_eq!(postfix("--4"), "4 neg neg");
    }

    #[test]
    fn test_linearize_nested_groups() {
        assert_eq!(
            postfix("(2+8*5)-((5+5)*3)+2"),
            "2 8 5 * + 5 5 + 3 * - 2 +"
        );
    }
}
