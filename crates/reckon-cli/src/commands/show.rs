use crate::error::{convert_eval_error, CliError, ErrorContext};
use reckon_eval::{linearize, EvalError};
use reckon_syntax::{lex, parse_tokens};

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowFormat {
    /// Token kinds with their text and byte offsets
    Tokens,
    /// Indented parse tree
    Tree,
    /// Postfix sequence the fold consumes
    Linear,
}

pub fn render(expression: &str, format: ShowFormat) -> Result<String, EvalError> {
    let tokens = lex(expression)?;
    match format {
        ShowFormat::Tokens => {
            let lines: Vec<String> = tokens
                .iter()
                .map(|t| format!("{:<8} {:?} @{}", format!("{:?}", t.kind), t.text, t.span.offset()))
                .collect();
            Ok(lines.join("\n"))
        }
        ShowFormat::Tree => Ok(parse_tokens(&tokens)?.to_string().trim_end().to_string()),
        ShowFormat::Linear => Ok(linearize(&parse_tokens(&tokens)?).to_string()),
    }
}

pub fn handle_show(expression: &str, format: ShowFormat) -> Result<(), CliError> {
    let rendered = render(expression, format)
        .map_err(|e| convert_eval_error(e, ErrorContext { source: expression }))?;
    println!("{}", rendered);
    Ok(())
}
