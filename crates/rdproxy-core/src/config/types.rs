//! Configuration type definitions for the RDP proxy.
//!
//! A [`ProxyConfig`] is only ever produced by the loader, so every value of
//! these types has already passed validation.
//!
//! # Example Configuration
//!
//! ```ini
//! [Server]
//! Host=0.0.0.0
//! Port=3389
//!
//! [Target]
//! FixedTarget=TRUE
//! Host=10.0.0.5
//! Port=3389
//!
//! [Channels]
//! Passthrough=rdpdr,rdpsnd
//!
//! [Certificates]
//! CertificateFile=/etc/rdproxy/server.crt
//! PrivateKeyFile=/etc/rdproxy/server.key
//! RdpKeyFile=/etc/rdproxy/server.key
//! ```

use std::path::PathBuf;

use serde::{Serialize, Serializer};

use crate::config::list::NameList;

/// Validated configuration of one proxy instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxyConfig {
    pub server: ServerConfig,
    pub target: TargetConfig,
    pub channels: ChannelsConfig,
    pub input: InputConfig,
    pub security: SecurityConfig,
    pub clipboard: ClipboardConfig,
    pub plugins: PluginsConfig,
    pub gfx: GfxSettings,
    pub certificates: CertificatesConfig,
}

/// `[Server]`: where the proxy listens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
    pub host: Option<String>,
    /// Set whenever `host` is set.
    pub port: Option<u16>,
}

/// `[Target]`: backend selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TargetConfig {
    /// When true, `host` and `port` are both set.
    pub fixed_target: bool,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// `[Channels]`: which virtual channels the proxy handles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelsConfig {
    pub gfx: bool,
    pub display_control: bool,
    pub clipboard: bool,
    pub audio_output: bool,
    pub remote_app: bool,
    /// Static channels forwarded untouched. Each name fits `CHANNEL_NAME_LEN`.
    pub passthrough: NameList,
}

/// `[Input]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InputConfig {
    pub keyboard: bool,
    pub mouse: bool,
}

/// `[Security]`: protocols offered to clients and used towards the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SecurityConfig {
    pub server_tls_security: bool,
    pub server_rdp_security: bool,
    pub client_tls_security: bool,
    pub client_nla_security: bool,
    pub client_rdp_security: bool,
    pub client_allow_fallback_to_tls: bool,
}

/// `[Clipboard]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClipboardConfig {
    pub text_only: bool,
    /// Maximum clipboard text length; 0 means unbounded.
    pub max_text_length: u32,
}

impl ClipboardConfig {
    pub fn text_limit(&self) -> Option<u32> {
        (self.max_text_length > 0).then_some(self.max_text_length)
    }
}

/// `[Plugins]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PluginsConfig {
    /// Modules to load.
    pub modules: NameList,
    /// Plugins that must be present for the proxy to start.
    pub required: NameList,
}

/// `[GFXSettings]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GfxSettings {
    pub decode_gfx: bool,
}

/// `[Certificates]`: TLS certificate, its private key and the RDP security key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificatesConfig {
    pub certificate: KeyMaterial,
    pub private_key: KeyMaterial,
    pub rdp_key: KeyMaterial,
}

/// Certificate or key material, given as a path or inline.
///
/// Inline content serializes as `"set"` so it never leaks into dumps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyMaterial {
    File(PathBuf),
    Content(#[serde(serialize_with = "redact")] String),
}

impl KeyMaterial {
    pub fn file(&self) -> Option<&PathBuf> {
        match self {
            KeyMaterial::File(path) => Some(path),
            KeyMaterial::Content(_) => None,
        }
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            KeyMaterial::File(_) => None,
            KeyMaterial::Content(content) => Some(content),
        }
    }
}

fn redact<S: Serializer>(_: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str("set")
}

impl ProxyConfig {
    /// Number of modules to load.
    pub fn modules_count(&self) -> usize {
        self.plugins.modules.len()
    }

    /// Modules to load, in configured order.
    pub fn modules(&self) -> &[String] {
        self.plugins.modules.as_slice()
    }

    /// Number of plugins that must be present.
    pub fn required_plugins_count(&self) -> usize {
        self.plugins.required.len()
    }

    /// Required plugin at `index`, or `None` past the end.
    pub fn required_plugin(&self, index: usize) -> Option<&str> {
        self.plugins.required.get(index)
    }
}
