use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not find input file {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to read input file {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No input filename given")]
    MissingInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an input not found error
    pub fn input_not_found(path: impl AsRef<Path>) -> Self {
        Self::InputNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create an input read error, mapping a missing file to [`AppError::InputNotFound`]
    pub fn input_read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::input_not_found(path);
        }
        Self::InputRead {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an output write error
    pub fn output_write(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Errors about the files and settings the user chose.
    ///
    /// These are reported as a single red line on stderr with exit status 1.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::InputNotFound { .. }
                | Self::InputRead { .. }
                | Self::OutputWrite { .. }
                | Self::MissingInput
                | Self::Config(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_input_not_found_message() {
        let error = AppError::input_not_found("names.txt");
        assert_eq!(error.to_string(), "Could not find input file names.txt");
        assert!(error.is_user_facing());
    }

    #[test]
    fn test_input_read_maps_not_found() {
        let error = AppError::input_read("missing.txt", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(error, AppError::InputNotFound { .. }));
    }

    #[test]
    fn test_input_read_keeps_other_errors() {
        let error = AppError::input_read(
            "locked.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(error, AppError::InputRead { .. }));
        assert!(error.to_string().contains("locked.txt"));
        assert!(error.is_user_facing());
    }

    #[test]
    fn test_output_write_message() {
        let error = AppError::output_write(
            "out/eneji_names_abbrevs.txt",
            io::Error::other("disk full"),
        );
        let message = error.to_string();
        assert!(message.contains("eneji_names_abbrevs.txt"));
        assert!(message.contains("disk full"));
        assert!(error.is_user_facing());
    }

    #[test]
    fn test_environment_errors_are_not_user_facing() {
        assert!(!AppError::log_setup_error("no writer").is_user_facing());
        assert!(!AppError::Io(io::Error::other("broken pipe")).is_user_facing());
    }

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("bad log path");
        assert_eq!(error.to_string(), "Configuration error: bad log path");
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse_error = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let error: AppError = parse_error.into();
        assert!(matches!(error, AppError::TomlDeserialize(_)));
    }
}
