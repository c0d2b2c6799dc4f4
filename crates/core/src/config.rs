//! Configuration management for the docsplit CLI.
//!
//! This module handles loading and merging configuration from multiple sources:
//! - Environment variables
//! - Command-line flags
//! - Config files (`.docsplit.yaml`)
//!
//! Precedence is CLI flags over environment variables over the config file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Declaration prefix used when nothing else is configured.
///
/// Matches the opening of an XML declaration, the boundary marker of the
/// concatenated patent blobs this tool was written for.
pub const DEFAULT_PREFIX: &str = "<?xml";

/// Main application configuration.
///
/// This struct holds all global options that affect CLI behavior across
/// commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Declaration-line prefix marking the start of an embedded document
    pub prefix: String,

    /// Directory to place output artifacts in (default: beside the source)
    pub output_dir: Option<PathBuf>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    split: Option<SplitSection>,
    logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SplitSection {
    prefix: Option<String>,
    #[serde(rename = "outputDir")]
    output_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingSection {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_file: None,
            prefix: DEFAULT_PREFIX.to_string(),
            output_dir: None,
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and defaults.
    ///
    /// Environment variables:
    /// - `DOCSPLIT_CONFIG`: path to config file
    /// - `DOCSPLIT_PREFIX`: declaration-line prefix
    /// - `DOCSPLIT_OUTPUT_DIR`: artifact output directory
    /// - `RUST_LOG`: log level
    /// - `NO_COLOR`: disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use docsplit_core::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load config");
    /// println!("Prefix: {}", config.prefix);
    /// ```
    pub fn load() -> AppResult<Self> {
        Self::load_with(None)
    }

    /// Load configuration, preferring an explicitly named config file.
    ///
    /// `cli_config` (the `--config` flag) wins over `DOCSPLIT_CONFIG`, which
    /// wins over the implicit `.docsplit.yaml`. A file named explicitly must
    /// exist; the implicit one is optional.
    pub fn load_with(cli_config: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        config.config_file = cli_config;
        if config.config_file.is_none() {
            if let Ok(config_file) = std::env::var("DOCSPLIT_CONFIG") {
                config.config_file = Some(PathBuf::from(config_file));
            }
        }

        if let Some(ref cf) = config.config_file {
            if !cf.exists() {
                return Err(AppError::Config(format!(
                    "Config file does not exist: {:?}",
                    cf
                )));
            }
        }

        // Load from YAML config file if one exists
        let config_path = if let Some(ref cf) = config.config_file {
            cf.clone()
        } else {
            PathBuf::from(".docsplit.yaml")
        };

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
            tracing::debug!("Merged config file {:?}", config_path);
        }

        // Environment variables override YAML config
        if let Ok(prefix) = std::env::var("DOCSPLIT_PREFIX") {
            config.prefix = prefix;
        }

        if let Ok(dir) = std::env::var("DOCSPLIT_OUTPUT_DIR") {
            config.output_dir = Some(PathBuf::from(dir));
        }

        config.log_level = std::env::var("RUST_LOG").ok();

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        config.validate()?;

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    fn merge_yaml(&mut self, path: &PathBuf) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(split) = config_file.split {
            if let Some(prefix) = split.prefix {
                result.prefix = prefix;
            }
            if let Some(dir) = split.output_dir {
                result.output_dir = Some(PathBuf::from(dir));
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// This method merges command-line flags with the loaded configuration,
    /// giving precedence to CLI flags over environment variables.
    pub fn with_overrides(
        mut self,
        prefix: Option<String>,
        output_dir: Option<PathBuf>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(prefix) = prefix {
            self.prefix = prefix;
        }

        if let Some(output_dir) = output_dir {
            self.output_dir = Some(output_dir);
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Validate configuration.
    ///
    /// An empty prefix would make every line a document boundary.
    pub fn validate(&self) -> AppResult<()> {
        if self.prefix.is_empty() {
            return Err(AppError::Config(
                "Declaration prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
