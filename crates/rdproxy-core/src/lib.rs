//! rdproxy-core: configuration library for the RDP proxy
//!
//! Loads the proxy's INI configuration, validates it and hands out owned,
//! immutable [`ProxyConfig`] values.
//!
//! # Main Entry Points
//!
//! - [`config`] - Load, validate and print proxy configuration
//! - [`ini`] - INI key/value source
//! - [`files`] - Filesystem checks for certificate paths
//! - [`errors`] - Error types

pub mod config;
pub mod errors;
pub mod events;
pub mod files;
pub mod ini;
pub mod logging;

// Re-export commonly used types at crate root for convenience
pub use config::{KeyMaterial, NameList, ProxyConfig};
pub use errors::{ConfigError, ErrorKind, RdproxyError};
pub use files::{FileProbe, HostFs, KnownFiles};
pub use ini::{IniError, IniFile, KeyValueSource};

// Re-export logging initialization
pub use logging::init_logging;
