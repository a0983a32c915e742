use std::path::PathBuf;

use miette::{Diagnostic, SourceSpan};
use reckon_eval::EvalError;
use reckon_syntax::SyntaxError;
use thiserror::Error;

/// CLI-specific error type that provides rich diagnostics
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("Syntax error: {message}")]
    #[diagnostic(code(reckon::cli::syntax_error))]
    Syntax {
        #[source_code]
        src: String,
        #[label("{message}")]
        span: SourceSpan,
        message: String,
        #[source]
        source: SyntaxError,
    },

    #[error("Evaluation failed")]
    #[diagnostic(code(reckon::cli::eval_error))]
    Eval {
        #[source]
        source: EvalError,
    },

    #[error("Failed to {operation} {}", path.display())]
    #[diagnostic(code(reckon::cli::io_error))]
    IoError {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration in {}", path.display())]
    #[diagnostic(code(reckon::cli::config_error), help("recognised keys are `precision` and `echo` under `[output]`"))]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Line {line} of {} failed", path.display())]
    #[diagnostic(code(reckon::cli::run_failed))]
    RunFailed {
        path: PathBuf,
        line: usize,
        #[related]
        failure: Vec<CliError>,
    },
}

/// Helper struct to provide context for error conversion
#[derive(Debug, Clone, Copy)]
pub struct ErrorContext<'a> {
    pub source: &'a str,
}

/// Convert evaluation errors, attaching the expression text to syntax errors
pub fn convert_eval_error(error: EvalError, ctx: ErrorContext) -> CliError {
    match error {
        EvalError::Syntax(syntax) => {
            let message = match &syntax {
                SyntaxError::LexError { .. } => "no token matches here".to_string(),
                SyntaxError::ParseError { reason, .. } => reason.clone(),
            };
            CliError::Syntax {
                src: ctx.source.to_string(),
                span: syntax.span(),
                message,
                source: syntax,
            }
        }
        other => CliError::Eval { source: other },
    }
}

/// Convert IO errors with context
pub fn convert_io_error(error: std::io::Error, path: PathBuf, operation: &str) -> CliError {
    CliError::IoError {
        path,
        operation: operation.to_string(),
        source: error,
    }
}
