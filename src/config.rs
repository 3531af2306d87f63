//! Configuration file support for pickbox.
//!
//! Configuration is loaded from `~/.config/pickbox/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/pickbox/config.toml
//! single_title = "Favourite fruit"
//! multiple_title = "Fruit basket"
//! placeholder = "Nothing picked"
//! log_dir = "/tmp/pickbox-logs"
//!
//! [[options]]
//! label = "Apple"
//! value = 1
//!
//! [[options]]
//! label = "Banana"
//! value = "banana"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::select::SelectOption;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Options offered by both selects
    pub options: Vec<SelectOption>,

    /// Heading above the single-select
    pub single_title: Option<String>,

    /// Heading above the multi-select
    pub multiple_title: Option<String>,

    /// Text shown when nothing is selected
    pub placeholder: Option<String>,

    /// Directory for log files
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit path. Unlike [`Config::load`],
    /// a missing or malformed file is an error.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pickbox")
            .join("config.toml")
    }

    /// Merge with CLI overrides.
    ///
    /// Option labels given on the command line replace the configured
    /// options; each gets its 1-based position as value.
    pub fn with_overrides(mut self, labels: Vec<String>) -> Self {
        if !labels.is_empty() {
            self.options = labels
                .into_iter()
                .enumerate()
                .map(|(i, label)| SelectOption::new(label, (i + 1) as i64))
                .collect();
        }
        self
    }

    /// Options to offer, falling back to a built-in list.
    pub fn options(&self) -> Vec<SelectOption> {
        if self.options.is_empty() {
            default_options()
        } else {
            self.options.clone()
        }
    }

    pub fn single_title(&self) -> &str {
        self.single_title.as_deref().unwrap_or("Single select")
    }

    pub fn multiple_title(&self) -> &str {
        self.multiple_title.as_deref().unwrap_or("Multiple select")
    }

    pub fn placeholder(&self) -> &str {
        self.placeholder.as_deref().unwrap_or("Select...")
    }

    /// Get the log directory, falling back to environment variable or default.
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .or_else(|| std::env::var("PICKBOX_LOG_DIR").ok().map(PathBuf::from))
            .unwrap_or_else(crate::log::default_dir)
    }
}

fn default_options() -> Vec<SelectOption> {
    ["First", "Second", "Third", "Fourth", "Fifth"]
        .iter()
        .enumerate()
        .map(|(i, label)| SelectOption::new(*label, (i + 1) as i64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::OptionValue;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.options.is_empty());
        assert!(config.single_title.is_none());
        assert_eq!(config.options().len(), 5);
        assert_eq!(config.placeholder(), "Select...");
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            single_title = "Fruit"
            log_dir = "/tmp/logs"

            [[options]]
            label = "Apple"
            value = 1

            [[options]]
            label = "Banana"
            value = "banana"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.single_title(), "Fruit");
        assert_eq!(config.multiple_title(), "Multiple select");
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/logs"));
        assert_eq!(config.options[0], SelectOption::new("Apple", 1));
        assert_eq!(
            config.options[1].value,
            OptionValue::Text("banana".to_string())
        );
    }

    #[test]
    fn test_cli_labels_override_options() {
        let config = Config::default().with_overrides(vec!["x".into(), "y".into()]);
        assert_eq!(
            config.options(),
            vec![SelectOption::new("x", 1), SelectOption::new("y", 2)]
        );

        let untouched = Config::default().with_overrides(vec![]);
        assert!(untouched.options.is_empty());
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Config::load_from(Path::new("/nonexistent/pickbox.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
