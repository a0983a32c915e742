use crate::config::OutputConfig;
use crate::error::{convert_eval_error, CliError, ErrorContext};

/// Evaluate one expression and render it with the output settings.
pub fn evaluate_line(expression: &str, output: &OutputConfig) -> Result<String, CliError> {
    let value = reckon_eval::evaluate(expression)
        .map_err(|e| convert_eval_error(e, ErrorContext { source: expression }))?;
    Ok(output.format_result(expression, value))
}

pub fn handle_eval(expression: &str, output: &OutputConfig) -> Result<(), CliError> {
    println!("{}", evaluate_line(expression, output)?);
    Ok(())
}
