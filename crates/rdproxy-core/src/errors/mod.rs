use std::error::Error;
use std::path::PathBuf;

use crate::ini::IniError;

/// Base trait for all library errors
pub trait RdproxyError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error was caused by the configuration the user supplied
    fn is_user_error(&self) -> bool {
        false
    }
}

/// The two failure classes a configuration load can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source was well-formed but its values break a rule.
    Validation,
    /// The source text is not well-formed key/value data.
    Parse,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Key '{section}.{key}' does not exist")]
    MissingKey {
        section: &'static str,
        key: &'static str,
    },

    #[error("Invalid value {value} for key '{section}.{key}' (expected {min}..={max})")]
    InvalidValue {
        section: &'static str,
        key: &'static str,
        value: i32,
        min: i64,
        max: i64,
    },

    #[error("Passthrough channel '{name}': name too long ({len} > {max} characters)")]
    ChannelNameTooLong { name: String, len: usize, max: usize },

    #[error("{section}/{key} file '{}' does not exist", path.display())]
    FileNotFound {
        section: &'static str,
        key: &'static str,
        path: PathBuf,
    },

    #[error("{section}/{key} has invalid empty value")]
    EmptyContent {
        section: &'static str,
        key: &'static str,
    },

    #[error("{section}/{file_key} and {section}/{content_key} are mutually exclusive options")]
    MutuallyExclusive {
        section: &'static str,
        file_key: &'static str,
        content_key: &'static str,
    },

    #[error("{section}/{file_key} or {section}/{content_key} is a required setting")]
    MissingOneOf {
        section: &'static str,
        file_key: &'static str,
        content_key: &'static str,
    },

    #[error("Failed to parse configuration: {source}")]
    Parse {
        #[from]
        source: IniError,
    },
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::Parse { .. } => ErrorKind::Parse,
            _ => ErrorKind::Validation,
        }
    }
}

impl RdproxyError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::MissingKey { .. } => "CONFIG_MISSING_KEY",
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID_VALUE",
            ConfigError::ChannelNameTooLong { .. } => "CONFIG_CHANNEL_NAME_TOO_LONG",
            ConfigError::FileNotFound { .. } => "CONFIG_FILE_NOT_FOUND",
            ConfigError::EmptyContent { .. } => "CONFIG_EMPTY_CONTENT",
            ConfigError::MutuallyExclusive { .. } => "CONFIG_MUTUALLY_EXCLUSIVE",
            ConfigError::MissingOneOf { .. } => "CONFIG_MISSING_ONE_OF",
            ConfigError::Parse { .. } => "CONFIG_PARSE_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        // An unreadable file is an environment problem, not a bad config.
        !matches!(
            self,
            ConfigError::Parse {
                source: IniError::Io { .. }
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_display() {
        let error = ConfigError::MissingKey {
            section: "Target",
            key: "Host",
        };
        assert_eq!(error.to_string(), "Key 'Target.Host' does not exist");
        assert_eq!(error.error_code(), "CONFIG_MISSING_KEY");
        assert_eq!(error.kind(), ErrorKind::Validation);
        assert!(error.is_user_error());
    }

    #[test]
    fn test_invalid_value_display() {
        let error = ConfigError::InvalidValue {
            section: "Server",
            key: "Port",
            value: 0,
            min: 1,
            max: 65535,
        };
        assert_eq!(
            error.to_string(),
            "Invalid value 0 for key 'Server.Port' (expected 1..=65535)"
        );
    }

    #[test]
    fn test_mutually_exclusive_display() {
        let error = ConfigError::MutuallyExclusive {
            section: "Certificates",
            file_key: "CertificateFile",
            content_key: "CertificateContent",
        };
        assert_eq!(
            error.to_string(),
            "Certificates/CertificateFile and Certificates/CertificateContent are mutually exclusive options"
        );
    }

    #[test]
    fn test_parse_error_kind() {
        let error = ConfigError::from(IniError::Syntax {
            line: 3,
            message: "missing '='".to_string(),
        });
        assert_eq!(error.kind(), ErrorKind::Parse);
        assert_eq!(error.error_code(), "CONFIG_PARSE_ERROR");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_io_error_is_not_user_error() {
        let error = ConfigError::from(IniError::Io {
            path: PathBuf::from("/nonexistent/proxy.ini"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        });
        assert_eq!(error.kind(), ErrorKind::Parse);
        assert!(!error.is_user_error());
    }
}
