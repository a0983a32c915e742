pub mod fold;
pub mod linearize;
pub mod stack;

pub use fold::fold;
pub use linearize::{linearize, visit_order};
pub use stack::{EvaluationStack, Symbol};

use miette::Diagnostic;
use reckon_syntax::SyntaxError;
use thiserror::Error;

/// Evaluation errors
#[derive(Debug, Error, Diagnostic, PartialEq)]
pub enum EvalError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("Operator `{symbol}` at position {position} is missing an operand")]
    #[diagnostic(code(reckon_eval::missing_operand))]
    MissingOperand { symbol: String, position: usize },

    #[error("Nothing to evaluate")]
    #[diagnostic(code(reckon_eval::empty_stack))]
    EmptyStack,

    #[error("{count} operands left after folding")]
    #[diagnostic(code(reckon_eval::leftover_operands))]
    LeftoverOperands { count: usize },

    #[error("Invalid number literal {text:?}")]
    #[diagnostic(code(reckon_eval::invalid_number))]
    InvalidNumber {
        text: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// Result type for evaluation
pub type EvalResult<T> = std::result::Result<T, EvalError>;

/// Evaluate an arithmetic expression.
///
/// Runs the whole pipeline: lex, parse, linearize, fold. Division follows
/// IEEE-754, so `1/0` is infinite and `0/0` is NaN rather than an error.
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    let tree = reckon_syntax::parse(expression)?;
    let stack = linearize(&tree);
    log::debug!("linearized {:?} to `{}`", expression, stack);
    fold(stack)
}
