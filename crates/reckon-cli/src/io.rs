use std::path::Path;

use crate::error::{convert_io_error, CliError};

pub fn read_file(path: &Path) -> Result<String, CliError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| convert_io_error(e, path.to_path_buf(), "read"))?;
    Ok(contents)
}
