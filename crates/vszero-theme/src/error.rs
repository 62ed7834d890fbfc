//! Error types for theme conversion.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while converting a theme.
///
/// Every variant is fatal for the batch: there is no partial output mode.
/// Malformed color strings are not errors (they normalize to null).
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The source directory could not be listed.
    #[error("Failed to list {}: {source}", .path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An input theme file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The XML was malformed or a required attribute was missing.
    #[error("Failed to parse theme {}: {source}", .path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },

    /// The record could not be converted to YAML.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A scalar could not be encoded in double-quoted form.
    #[error("JSON string encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// An output theme file could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    /// Path of the file or directory involved, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::ListDir { path, .. }
            | Self::Read { path, .. }
            | Self::Xml { path, .. }
            | Self::Write { path, .. } => Some(path),
            Self::Yaml(_) | Self::Json(_) => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = ConvertError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_read_error_display_names_path() {
        let err = ConvertError::Read {
            path: PathBuf::from("src/dark.vstheme"),
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("src/dark.vstheme"));
        assert!(msg.contains("file not found"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_path_accessor() {
        let err = ConvertError::Write {
            path: PathBuf::from("themes/Dark_2026.yaml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.path(),
            Some(std::path::Path::new("themes/Dark_2026.yaml"))
        );
    }
}
