//! Structured logging infrastructure for Mentora.
//!
//! Configurable logging built on the tracing crate: level, output format
//! and an optional non-blocking file target come from [`LoggingConfig`].

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::config::{LogFormat, LogLevel, LoggingConfig};

/// Error type for logging operations
#[derive(Debug, Error)]
pub enum LogError {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured log file path cannot be used
    #[error("invalid log file path: {0}")]
    InvalidLogFile(String),

    /// Error in subscriber setup
    #[error("subscriber setup error: {0}")]
    Subscriber(String),
}

/// Result type for logging operations
pub type Result<T> = std::result::Result<T, LogError>;

/// Initialize the logging system with the given configuration.
///
/// Idempotent: a subscriber that is already installed (common across test
/// binaries) is not an error.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let level = match config.level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    };

    let writer = make_writer(config)?;
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .with_writer(writer);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Default => builder.try_init(),
    };

    match result {
        Ok(()) => Ok(()),
        Err(err) => {
            let message = err.to_string();
            if message.contains("already been set") || message.contains("SetGlobalDefault") {
                Ok(())
            } else {
                Err(LogError::Subscriber(message))
            }
        }
    }
}

fn make_writer(config: &LoggingConfig) -> Result<BoxMakeWriter> {
    if let Some(path) = &config.file {
        let file_name = path
            .file_name()
            .ok_or_else(|| LogError::InvalidLogFile(path.display().to_string()))?;
        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => std::path::PathBuf::from("."),
        };
        let appender = tracing_appender::rolling::never(directory, file_name);
        return Ok(BoxMakeWriter::new(appender));
    }

    if config.stdout {
        Ok(BoxMakeWriter::new(std::io::stdout))
    } else {
        Ok(BoxMakeWriter::new(std::io::sink))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let config = LoggingConfig::default();
        init(&config).unwrap();
        init(&config).unwrap();
    }

    #[test]
    fn rejects_file_path_without_file_name() {
        let config = LoggingConfig {
            file: Some(std::path::PathBuf::from("/")),
            ..Default::default()
        };
        assert!(matches!(
            make_writer(&config),
            Err(LogError::InvalidLogFile(_))
        ));
    }
}
