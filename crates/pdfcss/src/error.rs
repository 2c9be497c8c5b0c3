//! Error types for the pdfcss crate.
//!
//! Rule emission never fails. Errors only come from loading configuration
//! and from writing finished stylesheets to an I/O destination.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring or flushing a stylesheet export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A configuration file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration YAML is malformed or has unknown keys.
    #[error("invalid export configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Writing the stylesheet failed.
    #[error("failed to write stylesheet: {0}")]
    Io(#[from] io::Error),
}

/// Result type for pdfcss operations.
pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_load_error_display_names_path() {
        let err = ExportError::Load {
            path: PathBuf::from("/tmp/export.yaml"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/export.yaml"));
        assert!(msg.contains("no such file"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        let err: ExportError = io_err.into();
        assert!(matches!(err, ExportError::Io(_)));
        assert!(err.to_string().contains("failed to write stylesheet"));
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<u32>("not a number").unwrap_err();
        let err: ExportError = yaml_err.into();
        assert!(matches!(err, ExportError::Config(_)));
    }
}
