use std::io;

use thiserror::Error;

/// Library-wide error type for bootstrap operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// External tool execution failed.
    #[error("{tool} failed: {error}")]
    ExternalToolError { tool: String, error: String },

    /// Archive download failed.
    #[error("Download of {url} failed: {details}")]
    DownloadError { url: String, details: String },

    /// Archive could not be read or unpacked.
    #[error("Archive error: {0}")]
    ArchiveError(String),

    /// Downloaded archive does not match the pinned digest.
    #[error("Archive checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    /// Host runtime is older than required.
    #[error("Python {required}+ required. You have {found}")]
    UnsupportedRuntime { required: String, found: String },

    /// Host runtime version output could not be understood.
    #[error("Could not determine runtime version from '{0}'")]
    RuntimeVersionParse(String),

    /// A pipeline step ended the install.
    #[error("{step}: {message}")]
    StepFailed { step: String, message: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
