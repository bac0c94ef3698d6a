//! Human-readable configuration dump.

use std::fmt;

use tracing::info;

use crate::config::list::NameList;
use crate::config::types::{KeyMaterial, ProxyConfig};

const UNSET: &str = "(unset)";

fn on_off(value: bool) -> &'static str {
    if value { "TRUE" } else { "FALSE" }
}

fn opt<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| UNSET.to_string(), |v| v.to_string())
}

fn write_list(f: &mut fmt::Formatter<'_>, list: &NameList) -> fmt::Result {
    for name in list.iter() {
        writeln!(f, "\t\t- {}", name)?;
    }
    Ok(())
}

fn write_key_material(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    material: &KeyMaterial,
) -> fmt::Result {
    let file = material.file().map(|p| p.display().to_string());
    let content = material.content().map(|_| "set");
    writeln!(f, "\t\t{}File: {}", label, opt(file))?;
    writeln!(f, "\t\t{}Content: {}", label, opt(content))
}

/// Multi-section dump. Inline key content is shown only as `set`.
impl fmt::Display for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Proxy configuration:")?;

        writeln!(f, "\tServer:")?;
        writeln!(f, "\t\tHost: {}", opt(self.server.host.as_deref()))?;
        writeln!(f, "\t\tPort: {}", opt(self.server.port))?;

        if self.target.fixed_target {
            writeln!(f, "\tTarget:")?;
            writeln!(f, "\t\tTargetHost: {}", opt(self.target.host.as_deref()))?;
            writeln!(f, "\t\tTargetPort: {}", opt(self.target.port))?;
        }

        writeln!(f, "\tInput:")?;
        writeln!(f, "\t\tKeyboard: {}", on_off(self.input.keyboard))?;
        writeln!(f, "\t\tMouse: {}", on_off(self.input.mouse))?;

        let security = &self.security;
        writeln!(f, "\tServer Security:")?;
        writeln!(f, "\t\tServerTlsSecurity: {}", on_off(security.server_tls_security))?;
        writeln!(f, "\t\tServerRdpSecurity: {}", on_off(security.server_rdp_security))?;

        writeln!(f, "\tClient Security:")?;
        writeln!(f, "\t\tClientNlaSecurity: {}", on_off(security.client_nla_security))?;
        writeln!(f, "\t\tClientTlsSecurity: {}", on_off(security.client_tls_security))?;
        writeln!(f, "\t\tClientRdpSecurity: {}", on_off(security.client_rdp_security))?;
        writeln!(
            f,
            "\t\tClientAllowFallbackToTls: {}",
            on_off(security.client_allow_fallback_to_tls)
        )?;

        let channels = &self.channels;
        writeln!(f, "\tChannels:")?;
        writeln!(f, "\t\tGFX: {}", on_off(channels.gfx))?;
        writeln!(f, "\t\tDisplayControl: {}", on_off(channels.display_control))?;
        writeln!(f, "\t\tClipboard: {}", on_off(channels.clipboard))?;
        writeln!(f, "\t\tAudioOutput: {}", on_off(channels.audio_output))?;
        writeln!(f, "\t\tRemoteApp: {}", on_off(channels.remote_app))?;

        if !channels.passthrough.is_empty() {
            writeln!(f, "\tStatic Channels Proxy:")?;
            write_list(f, &channels.passthrough)?;
        }

        writeln!(f, "\tClipboard:")?;
        writeln!(f, "\t\tTextOnly: {}", on_off(self.clipboard.text_only))?;
        if let Some(limit) = self.clipboard.text_limit() {
            writeln!(f, "\t\tMaxTextLength: {}", limit)?;
        }

        writeln!(f, "\tGFXSettings:")?;
        writeln!(f, "\t\tDecodeGFX: {}", on_off(self.gfx.decode_gfx))?;

        writeln!(f, "\tPlugins/Modules:")?;
        write_list(f, &self.plugins.modules)?;

        writeln!(f, "\tPlugins/Required:")?;
        write_list(f, &self.plugins.required)?;

        let certs = &self.certificates;
        writeln!(f, "\tCertificates:")?;
        write_key_material(f, "Certificate", &certs.certificate)?;
        write_key_material(f, "PrivateKey", &certs.private_key)?;
        write_key_material(f, "RdpKey", &certs.rdp_key)
    }
}

/// Log the configuration dump, one `info` event per line.
pub fn print_config(config: &ProxyConfig) {
    for line in config.to_string().lines() {
        info!(event = "core.config.print", "{}", line);
    }
}
