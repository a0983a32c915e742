use crate::stack::{EvaluationStack, Symbol};
use crate::{EvalError, EvalResult};
use reckon_syntax::Operator;

/// Second evaluation pass: reduce a linearized sequence to one number.
///
/// Symbols are taken from the front of `stack`. Numbers are pushed on an
/// operand stack; a binary operator pops `first` then `second` and pushes
/// `first + second`, `first * second`, `second - first` or `second / first`;
/// `Negate` pops one operand and pushes its negation.
///
/// Arithmetic is plain `f64`: dividing by zero yields an infinity or NaN.
pub fn fold(mut stack: EvaluationStack<'_>) -> EvalResult<f64> {
    let mut operands: Vec<f64> = Vec::with_capacity(stack.len());
    let mut position = 0;

    while let Some(symbol) = stack.pop_front() {
        match symbol {
            Symbol::Number(text) => {
                let value = text.parse::<f64>().map_err(|source| EvalError::InvalidNumber {
                    text: text.to_string(),
                    source,
                })?;
                operands.push(value);
            }
            Symbol::Operator(op) => {
                let first = pop_operand(&mut operands, &symbol, position)?;
                let second = pop_operand(&mut operands, &symbol, position)?;
                let value = apply(op, first, second);
                log::trace!("{} {} {} = {}", second, op, first, value);
                operands.push(value);
            }
            Symbol::Negate => {
                let value = pop_operand(&mut operands, &symbol, position)?;
                log::trace!("neg {} = {}", value, -value);
                operands.push(-value);
            }
        }
        position += 1;
    }

    match operands.as_slice() {
        [] => Err(EvalError::EmptyStack),
        [value] => {
            log::debug!("folded {} symbols to {}", position, value);
            Ok(*value)
        }
        rest => Err(EvalError::LeftoverOperands { count: rest.len() }),
    }
}

/// Combine two operands; `second` was pushed before `first`.
pub fn apply(op: Operator, first: f64, second: f64) -> f64 {
    match op {
        Operator::Add => first + second,
        Operator::Mul => first * second,
        Operator::Sub => second - first,
        Operator::Div => second / first,
    }
}

fn pop_operand(operands: &mut Vec<f64>, symbol: &Symbol<'_>, position: usize) -> EvalResult<f64> {
    operands.pop().ok_or_else(|| EvalError::MissingOperand {
        symbol: symbol.to_string(),
        position,
    })
}
