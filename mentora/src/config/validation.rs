//! Configuration validation utilities.

use super::ConfigError;
use super::models::*;

/// Validate the entire configuration.
pub fn validate_config(config: &MentoraConfig) -> Result<(), ConfigError> {
    validate_logging_config(&config.logging)?;
    Ok(())
}

/// Validate logging configuration.
fn validate_logging_config(config: &LoggingConfig) -> Result<(), ConfigError> {
    if let Some(file) = &config.file {
        if file.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "Log file path cannot be empty".to_string(),
            ));
        }
        if file.file_name().is_none() {
            return Err(ConfigError::ValidationError(format!(
                "Log file path has no file name: {}",
                file.display()
            )));
        }
    }

    if config.file.is_none() && !config.stdout {
        // Nothing would receive log output; allowed, but worth flagging
        // during validation of explicitly assembled configs.
        tracing::warn!("logging has no file and stdout disabled; output is discarded");
    }

    Ok(())
}
