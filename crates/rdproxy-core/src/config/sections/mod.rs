//! One loader per INI section.
//!
//! Each loader reads only its own section and returns that section's typed
//! value. Loaders never see each other's output.

mod certificates;
mod channels;

pub use certificates::load_certificates;
pub use channels::load_channels;

use crate::config::defaults;
use crate::config::fields::FieldReader;
use crate::config::list::NameList;
use crate::config::types::{
    ClipboardConfig, GfxSettings, InputConfig, PluginsConfig, SecurityConfig, ServerConfig,
    TargetConfig,
};
use crate::errors::ConfigError;

/// `[Server]`: a port is required once a host is given.
pub fn load_server(reader: &FieldReader<'_>) -> Result<ServerConfig, ConfigError> {
    let Some(host) = reader.string(defaults::SERVER_HOST, false)? else {
        return Ok(ServerConfig::default());
    };

    let port = reader.uint16(defaults::SERVER_PORT, true)?;

    Ok(ServerConfig {
        host: Some(host.to_string()),
        port,
    })
}

/// `[Target]`: host and port are required only for a fixed target.
pub fn load_target(reader: &FieldReader<'_>) -> Result<TargetConfig, ConfigError> {
    let fixed_target = reader.flag(&defaults::FIXED_TARGET);
    let port = reader.uint16(defaults::TARGET_PORT, fixed_target)?;
    let host = reader.string(defaults::TARGET_HOST, fixed_target)?;

    Ok(TargetConfig {
        fixed_target,
        host: host.map(str::to_string),
        port,
    })
}

pub fn load_input(reader: &FieldReader<'_>) -> InputConfig {
    InputConfig {
        keyboard: reader.flag(&defaults::KEYBOARD),
        mouse: reader.flag(&defaults::MOUSE),
    }
}

pub fn load_security(reader: &FieldReader<'_>) -> SecurityConfig {
    SecurityConfig {
        server_tls_security: reader.flag(&defaults::SERVER_TLS_SECURITY),
        server_rdp_security: reader.flag(&defaults::SERVER_RDP_SECURITY),
        client_tls_security: reader.flag(&defaults::CLIENT_TLS_SECURITY),
        client_nla_security: reader.flag(&defaults::CLIENT_NLA_SECURITY),
        client_rdp_security: reader.flag(&defaults::CLIENT_RDP_SECURITY),
        client_allow_fallback_to_tls: reader.flag(&defaults::CLIENT_ALLOW_FALLBACK_TO_TLS),
    }
}

/// `[Plugins]`: both lists are read raw; a missing key is an empty list.
pub fn load_plugins(reader: &FieldReader<'_>) -> PluginsConfig {
    PluginsConfig {
        modules: NameList::parse(reader.raw(defaults::MODULES)),
        required: NameList::parse(reader.raw(defaults::REQUIRED_PLUGINS)),
    }
}

pub fn load_clipboard(reader: &FieldReader<'_>) -> Result<ClipboardConfig, ConfigError> {
    let text_only = reader.flag(&defaults::TEXT_ONLY);
    let max_text_length = reader
        .uint32(defaults::MAX_TEXT_LENGTH, false)?
        .unwrap_or(0);

    Ok(ClipboardConfig {
        text_only,
        max_text_length,
    })
}

pub fn load_gfx_settings(reader: &FieldReader<'_>) -> GfxSettings {
    GfxSettings {
        decode_gfx: reader.flag(&defaults::DECODE_GFX),
    }
}
