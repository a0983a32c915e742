use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CliError;
use crate::io::read_file;
use crate::utils::find_config;

/// Contents of `reckon.toml`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How results are printed
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Fixed number of digits after the decimal point.
    /// When unset, values print in their shortest form.
    #[serde(default)]
    pub precision: Option<usize>,

    /// Print `<expr> = <value>` instead of the bare value.
    #[serde(default)]
    pub echo: bool,
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, the nearest `reckon.toml`
    /// from `start_dir` upwards is used, falling back to defaults.
    pub fn load(explicit: Option<&Path>, start_dir: &Path) -> Result<Self, CliError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match find_config(start_dir) {
                Some(path) => path,
                None => {
                    log::debug!("no config file found, using defaults");
                    return Ok(Config::default());
                }
            },
        };

        let contents = read_file(&path)?;
        let config = Self::parse(&contents, path.clone())?;
        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn parse(contents: &str, path: PathBuf) -> Result<Self, CliError> {
        toml::from_str(contents).map_err(|source| CliError::Config { path, source })
    }
}

impl OutputConfig {
    pub fn format_value(&self, value: f64) -> String {
        match self.precision {
            Some(digits) => format!("{:.*}", digits, value),
            None => value.to_string(),
        }
    }

    pub fn format_result(&self, expression: &str, value: f64) -> String {
        let value = self.format_value(value);
        if self.echo {
            format!("{} = {}", expression, value)
        } else {
            value
        }
    }
}
