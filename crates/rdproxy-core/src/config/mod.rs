//! # Configuration System
//!
//! INI configuration for the RDP proxy.
//!
//! ## Sections
//!
//! | Section          | Purpose                                              |
//! |------------------|------------------------------------------------------|
//! | `[Server]`       | Listen host and port                                 |
//! | `[Target]`       | Fixed backend host/port                              |
//! | `[Channels]`     | Channel switches and passthrough channel names       |
//! | `[Input]`        | Keyboard and mouse forwarding                        |
//! | `[Security]`     | TLS/RDP/NLA security on both legs                    |
//! | `[Clipboard]`    | Text-only mode and text length limit                 |
//! | `[Plugins]`      | Modules to load and plugins that must be present     |
//! | `[GFXSettings]`  | GFX decoding                                         |
//! | `[Certificates]` | TLS certificate, private key and RDP key             |
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use rdproxy_core::config::ProxyConfig;
//! use std::path::Path;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ProxyConfig::load_from_file(Path::new("/etc/rdproxy/proxy.ini"))?;
//!     for module in config.modules() {
//!         println!("loading {}", module);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! A loaded config is plain owned data: clone it to hand one copy to each
//! session, drop it when done.

pub mod defaults;
pub mod fields;
pub mod list;
pub mod loading;
pub mod print;
pub mod sections;
pub mod types;

// Public API exports
pub use defaults::CHANNEL_NAME_LEN;
pub use list::NameList;
pub use loading::{load_from_buffer, load_from_buffer_with, load_from_file, load_ini};
pub use print::print_config;
pub use types::{
    CertificatesConfig, ChannelsConfig, ClipboardConfig, GfxSettings, InputConfig, KeyMaterial,
    PluginsConfig, ProxyConfig, SecurityConfig, ServerConfig, TargetConfig,
};

use std::path::Path;

use crate::errors::ConfigError;

impl ProxyConfig {
    /// Load configuration from an INI file.
    ///
    /// See [`loading::load_from_file`] for details.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        loading::load_from_file(path)
    }

    /// Load configuration from INI text.
    ///
    /// See [`loading::load_from_buffer`] for details.
    pub fn load_from_buffer(buffer: &str) -> Result<Self, ConfigError> {
        loading::load_from_buffer(buffer)
    }

    /// Log the configuration dump.
    ///
    /// See [`print::print_config`] for details.
    pub fn print(&self) {
        print::print_config(self)
    }
}
