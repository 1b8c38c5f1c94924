//! Configuration error types.

use crate::logger::paint;
use owo_colors::{Stream, Style};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("unknown brand `{id}` (available: {available})")]
    UnknownBrand { id: String, available: String },

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., "brands.my-place.defaults.url")
    pub field: String,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dim = Style::new().dimmed();
        // Field path in cyan brackets
        writeln!(
            f,
            "{}{}{}",
            paint("[", Stream::Stderr, dim),
            paint(&self.field, Stream::Stderr, Style::new().cyan()),
            paint("]", Stream::Stderr, dim)
        )?;
        // Error message with red bullet
        write!(f, "{} {}", paint("→", Stream::Stderr, Style::new().red()), self.message)?;
        // Hint in yellow
        if let Some(hint) = &self.hint {
            let label = paint("hint:", Stream::Stderr, Style::new().yellow());
            write!(f, "\n  {label} {hint}")?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), ConfigError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Diagnostics(self))
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alert = Style::new().red().bold();
        writeln!(f, "{}\n", paint("config validation failed:", Stream::Stderr, alert))?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            let dim = Style::new().dimmed();
            write!(
                f,
                "\n\n{} {} {}",
                paint("found", Stream::Stderr, dim),
                paint(self.errors.len(), Stream::Stderr, alert),
                paint("errors", Stream::Stderr, dim)
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("restohead.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("restohead.toml"));

        let unknown = ConfigError::UnknownBrand {
            id: "x".into(),
            available: "a, b".into(),
        };
        assert_eq!(unknown.to_string(), "unknown brand `x` (available: a, b)");
    }

    #[test]
    fn test_diagnostics_collect_all() {
        owo_colors::set_override(false);

        let mut diag = ConfigDiagnostics::new();
        diag.error("brands.a.geo.latitude", "not a number");
        diag.error_with_hint("brands.a.defaults.url", "invalid URL", "use https://...");
        assert_eq!(diag.len(), 2);

        let err = diag.into_result().unwrap_err();
        let display = err.to_string();
        assert!(display.contains("[brands.a.geo.latitude]"));
        assert!(display.contains("hint: use https://..."));
        assert!(display.contains("found 2 errors"));
    }

    #[test]
    fn test_empty_diagnostics_ok() {
        assert!(ConfigDiagnostics::new().into_result().is_ok());
    }
}
