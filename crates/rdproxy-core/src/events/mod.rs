//! Lifecycle events shared by rdproxy front ends.

use std::path::Path;

use tracing::{error, info};

use crate::errors::RdproxyError;

/// Emitted once per invocation, before any configuration is touched.
pub fn log_app_startup(command: &str) {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION"),
        command = command
    );
}

/// A configuration file was rejected.
///
/// `user_error` separates bad configuration content from failures of the
/// host (unreadable file), which operators usually want to alert on.
pub fn log_config_rejected(path: &Path, error: &dyn RdproxyError) {
    error!(
        event = "core.app.config_rejected",
        path = %path.display(),
        error_code = error.error_code(),
        user_error = error.is_user_error(),
        error = %error
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConfigError;
    use crate::ini::IniError;

    #[test]
    fn test_config_rejected_accepts_any_error_family() {
        log_app_startup("check");

        let missing = ConfigError::MissingKey {
            section: "Target",
            key: "Host",
        };
        log_config_rejected(Path::new("proxy.ini"), &missing);

        let syntax = IniError::Syntax {
            line: 3,
            message: "empty key name".to_string(),
        };
        log_config_rejected(Path::new("proxy.ini"), &syntax);
    }
}
