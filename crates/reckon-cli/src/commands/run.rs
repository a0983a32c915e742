use crate::commands::eval::evaluate_line;
use crate::config::OutputConfig;
use crate::error::CliError;
use crate::io::read_file;
use std::path::Path;

/// Evaluate every non-empty line of `path`, stopping at the first failure.
pub fn handle_run(path: &Path, output: &OutputConfig) -> Result<(), CliError> {
    let contents = read_file(path)?;
    log::info!("evaluating expressions from {}", path.display());

    for (index, line) in contents.lines().enumerate() {
        let expression = line.trim_end_matches('\r');
        if expression.is_empty() {
            continue;
        }

        let rendered = evaluate_line(expression, output).map_err(|e| CliError::RunFailed {
            path: path.to_path_buf(),
            line: index + 1,
            failure: vec![e],
        })?;
        println!("{}", rendered);
    }

    Ok(())
}
