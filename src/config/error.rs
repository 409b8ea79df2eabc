//! Error type for settings load, decode and save

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = SettingsError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum SettingsError {
    /// The platform data directory could not be determined.
    #[error("could not determine platform data directory")]
    NoDataDir,

    /// A file system I/O error other than "file not found" on load.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid JSON.
    #[error("failed to parse settings JSON at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The settings file is valid JSON but its top level is not an object.
    #[error("settings file {path} must contain a JSON object, found {found}")]
    NotAnObject { path: PathBuf, found: &'static str },

    #[error("setting '{key}' expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Stored integer does not fit the accessor's width.
    #[error("setting '{key}' value {value} does not fit in {target}")]
    OutOfRange {
        key: String,
        value: i128,
        target: &'static str,
    },

    #[error("setting '{key}' has unknown {setting} code {code}")]
    UnknownVariant {
        key: String,
        code: i128,
        setting: &'static str,
    },

    #[error("setting '{key}' path is not valid UTF-8: {}", .path.display())]
    NonUtf8Path { key: String, path: PathBuf },

    /// User-supplied text could not be parsed for the setting's kind.
    #[error("invalid value '{input}' for '{key}': expected {expected}")]
    InvalidInput {
        key: String,
        input: String,
        expected: String,
    },

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SettingsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for the decode-time kinds (stored value disagrees with the accessor)
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::TypeMismatch { .. } | Self::OutOfRange { .. } | Self::UnknownVariant { .. }
        )
    }
}
