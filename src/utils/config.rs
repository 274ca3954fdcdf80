use serde::Deserialize;
use std::{fs::File, io::BufReader, path::Path};
use tracing::debug;

use crate::GeneratorError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// First word of the command line recorded in the generated header.
    #[serde(default = "default_app_name")]
    pub app_name: String,
    /// Project-wide default for `--empty`.
    #[serde(default)]
    pub allow_empty: bool,
}

pub fn default_app_name() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app_name: default_app_name(),
            allow_empty: false,
        }
    }
}

impl Config {
    pub fn from(config_file_path: &Path) -> Result<Self, GeneratorError> {
        debug!("Loading config {}", config_file_path.display());
        let file = File::open(config_file_path).map_err(|err| {
            GeneratorError::Configuration(format!(
                "cannot open {}: {}",
                config_file_path.display(),
                err
            ))
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|err| {
            GeneratorError::Configuration(format!(
                "invalid config {}: {}",
                config_file_path.display(),
                err
            ))
        })
    }

    pub fn new() -> Self {
        Config::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::new());
        assert_eq!(config.app_name, "go-enumgen");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"app_name": "enumgen", "allow_empty": true}}"#).unwrap();

        let config = Config::from(file.path()).unwrap();
        assert_eq!(config.app_name, "enumgen");
        assert!(config.allow_empty);
    }

    #[test]
    fn test_invalid_file_is_configuration_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(
            Config::from(file.path()),
            Err(GeneratorError::Configuration(_))
        ));
        assert!(matches!(
            Config::from(Path::new("/nonexistent/enumgen.json")),
            Err(GeneratorError::Configuration(_))
        ));
    }
}
