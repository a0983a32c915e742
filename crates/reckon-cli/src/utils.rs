use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "reckon.toml";

/// Finds the nearest `reckon.toml` by searching upwards from `start_path`.
pub fn find_config(start_path: &Path) -> Option<PathBuf> {
    let mut current = if start_path.is_dir() {
        start_path.to_path_buf()
    } else {
        start_path.parent().map_or_else(
            || start_path.to_path_buf(),
            |p| p.to_path_buf()
        )
    };

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.is_file() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}
