use std::path::PathBuf;

use crate::errors::RdproxyError;

#[derive(Debug, thiserror::Error)]
pub enum IniError {
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },
}

impl RdproxyError for IniError {
    fn error_code(&self) -> &'static str {
        match self {
            IniError::Io { .. } => "INI_IO_ERROR",
            IniError::Syntax { .. } => "INI_SYNTAX_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, IniError::Syntax { .. })
    }
}
