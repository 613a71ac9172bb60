//! Configuration builder.
//!
//! Builder pattern API for assembling configurations in code.

use super::{Result, models::*, validation};
use std::path::Path;

/// Builder for creating [`MentoraConfig`] instances.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: MentoraConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: MentoraConfig::default(),
        }
    }

    /// Builder seeded with the stock defaults, the starting point used by
    /// `init_with_defaults`.
    pub fn defaults() -> Self {
        Self::new()
    }

    /// Use in-memory storage (good for testing).
    pub fn with_memory_storage(mut self) -> Self {
        self.config.storage.backend = StorageBackend::Memory;
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Log to the given file.
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.logging.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enable or disable stdout logging.
    pub fn with_stdout_logging(mut self, stdout: bool) -> Self {
        self.config.logging.stdout = stdout;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<MentoraConfig> {
        validation::validate_config(&self.config)?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
