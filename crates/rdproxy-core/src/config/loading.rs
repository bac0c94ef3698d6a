//! Configuration loading.
//!
//! Sections are loaded in a fixed order and the first failure ends the load:
//! Server, Target, Channels, Input, Security, Plugins, Clipboard,
//! GFXSettings, Certificates. The [`ProxyConfig`] is assembled only after
//! every section succeeded, so a caller either gets a fully validated config
//! or an error.

use std::path::Path;

use tracing::{error, info, warn};

use crate::config::defaults;
use crate::config::fields::FieldReader;
use crate::config::sections;
use crate::config::types::ProxyConfig;
use crate::errors::{ConfigError, RdproxyError};
use crate::files::{FileProbe, HostFs};
use crate::ini::{IniFile, KeyValueSource};

const KNOWN_SECTIONS: [&str; 9] = [
    defaults::SERVER,
    defaults::TARGET,
    defaults::CHANNELS,
    defaults::INPUT,
    defaults::SECURITY,
    defaults::CLIPBOARD,
    defaults::PLUGINS,
    defaults::GFX_SETTINGS,
    defaults::CERTIFICATES,
];

/// Build a configuration from any key/value source.
///
/// # Errors
///
/// Returns the first validation error any section reports.
pub fn load_ini(
    source: &dyn KeyValueSource,
    files: &dyn FileProbe,
) -> Result<ProxyConfig, ConfigError> {
    let reader = FieldReader::new(source);

    let server = sections::load_server(&reader)?;
    let target = sections::load_target(&reader)?;
    let channels = sections::load_channels(&reader)?;
    let input = sections::load_input(&reader);
    let security = sections::load_security(&reader);
    let plugins = sections::load_plugins(&reader);
    let clipboard = sections::load_clipboard(&reader)?;
    let gfx = sections::load_gfx_settings(&reader);
    let certificates = sections::load_certificates(&reader, files)?;

    Ok(ProxyConfig {
        server,
        target,
        channels,
        input,
        security,
        clipboard,
        plugins,
        gfx,
        certificates,
    })
}

/// Parse and load a configuration held in memory.
///
/// Certificate and key paths are checked against the real filesystem.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the text is not valid INI, otherwise the
/// first validation error.
pub fn load_from_buffer(buffer: &str) -> Result<ProxyConfig, ConfigError> {
    load_from_buffer_with(buffer, &HostFs)
}

/// [`load_from_buffer`] with an explicit [`FileProbe`].
pub fn load_from_buffer_with(
    buffer: &str,
    files: &dyn FileProbe,
) -> Result<ProxyConfig, ConfigError> {
    info!(event = "core.config.load_started", source = "buffer");

    let ini = IniFile::read_buffer(buffer).map_err(|e| {
        error!(
            event = "core.config.parse_failed",
            source = "buffer",
            error = %e
        );
        ConfigError::from(e)
    })?;

    finish_load(&ini, files, "buffer")
}

/// Read, parse and load a configuration file.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the file cannot be read or is not valid
/// INI, otherwise the first validation error.
pub fn load_from_file(path: &Path) -> Result<ProxyConfig, ConfigError> {
    let source = path.display().to_string();
    info!(event = "core.config.load_started", source = %source);

    let ini = IniFile::read_file(path).map_err(|e| {
        error!(
            event = "core.config.parse_failed",
            source = %source,
            error = %e
        );
        ConfigError::from(e)
    })?;

    finish_load(&ini, &HostFs, &source)
}

fn finish_load(
    ini: &IniFile,
    files: &dyn FileProbe,
    source: &str,
) -> Result<ProxyConfig, ConfigError> {
    for name in ini.section_names() {
        if !KNOWN_SECTIONS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(name))
        {
            warn!(
                event = "core.config.unknown_section",
                source = source,
                section = name
            );
        }
    }

    match load_ini(ini, files) {
        Ok(config) => {
            info!(
                event = "core.config.load_completed",
                source = source,
                fixed_target = config.target.fixed_target,
                passthrough = config.channels.passthrough.len(),
                modules = config.modules_count()
            );
            Ok(config)
        }
        Err(e) => {
            error!(
                event = "core.config.load_failed",
                source = source,
                error_code = e.error_code(),
                error = %e
            );
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::list::NameList;
    use crate::config::types::KeyMaterial;
    use crate::errors::ErrorKind;
    use crate::files::KnownFiles;
    use std::fs;
    use std::path::PathBuf;

    const CERTS: &str = "[Certificates]\n\
        CertificateFile=/etc/rdproxy/server.crt\n\
        PrivateKeyFile=/etc/rdproxy/server.key\n\
        RdpKeyContent=rdp-key\n";

    fn files() -> KnownFiles {
        KnownFiles::new(["/etc/rdproxy/server.crt", "/etc/rdproxy/server.key"])
    }

    fn load(text: &str) -> Result<ProxyConfig, ConfigError> {
        load_from_buffer_with(&format!("{}\n{}", text, CERTS), &files())
    }

    fn sample() -> ProxyConfig {
        load(
            "[Server]\nHost=0.0.0.0\nPort=3389\n\
             [Target]\nFixedTarget=TRUE\nHost=10.0.0.5\nPort=3390\n\
             [Channels]\nPassthrough=rdpdr,rdpsnd\n\
             [Plugins]\nModules=capture,demo\nRequired=capture\n\
             [Clipboard]\nMaxTextLength=1024\n",
        )
        .unwrap()
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = load("").unwrap();
        assert_eq!(config.server.host, None);
        assert!(!config.target.fixed_target);
        assert!(config.channels.gfx);
        assert!(config.channels.passthrough.is_empty());
        assert!(config.input.keyboard);
        assert!(config.security.client_nla_security);
        assert_eq!(config.clipboard.max_text_length, 0);
        assert!(!config.gfx.decode_gfx);
        assert_eq!(config.modules_count(), 0);
        assert_eq!(config.required_plugins_count(), 0);
        assert_eq!(
            config.certificates.rdp_key,
            KeyMaterial::Content("rdp-key".to_string())
        );
    }

    #[test]
    fn test_full_config() {
        let config = sample();
        assert_eq!(config.server.port, Some(3389));
        assert_eq!(config.target.host.as_deref(), Some("10.0.0.5"));
        assert_eq!(config.target.port, Some(3390));
        assert_eq!(config.channels.passthrough.as_slice(), &["rdpdr", "rdpsnd"]);
        assert_eq!(config.modules(), &["capture", "demo"]);
        assert_eq!(config.required_plugin(0), Some("capture"));
        assert_eq!(config.required_plugin(1), None);
        assert_eq!(config.clipboard.text_limit(), Some(1024));
    }

    #[test]
    fn test_passthrough_scenario() {
        let config = load("[Channels]\nPassthrough=a,b,c\n").unwrap();
        assert!(config.channels.gfx);
        assert_eq!(config.channels.passthrough, NameList::parse(Some("a,b,c")));
    }

    #[test]
    fn test_fixed_target_without_host_fails() {
        let result = load("[Target]\nFixedTarget=TRUE\n");
        assert!(matches!(result, Err(ConfigError::MissingKey { .. })));
    }

    #[test]
    fn test_server_port_boundaries() {
        for (port, ok) in [("0", false), ("1", true), ("65535", true), ("65536", false)] {
            let result = load(&format!("[Server]\nHost=localhost\nPort={}\n", port));
            assert_eq!(result.is_ok(), ok, "Port={}", port);
        }
    }

    #[test]
    fn test_channel_name_boundary() {
        assert!(load("[Channels]\nPassthrough=1234567\n").is_ok());
        let result = load("[Channels]\nPassthrough=12345678\n");
        assert!(matches!(
            result,
            Err(ConfigError::ChannelNameTooLong { .. })
        ));
    }

    #[test]
    fn test_certificate_conflict_fails() {
        let result = load_from_buffer_with(
            "[Certificates]\nCertificateFile=/tmp/a.pem\nCertificateContent=abc\n",
            &KnownFiles::new(["/tmp/a.pem"]),
        );
        let error = result.unwrap_err();
        assert!(matches!(error, ConfigError::MutuallyExclusive { .. }));
        assert_eq!(error.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_certificate_missing_file() {
        let result = load_from_buffer("[Certificates]\nCertificateFile=/nonexistent/rdproxy/a.pem\n");
        let error = result.unwrap_err();
        assert!(matches!(error, ConfigError::FileNotFound { .. }));
        assert_eq!(error.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_without_certificates_fails() {
        let result = load_from_buffer_with("[Server]\n", &files());
        assert!(matches!(result, Err(ConfigError::MissingOneOf { .. })));
    }

    #[test]
    fn test_first_failing_section_wins() {
        // Server fails before Channels is reached.
        let result = load("[Server]\nHost=x\nPort=0\n[Channels]\nPassthrough=waytoolongname\n");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                section: "Server",
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_ini_is_parse_error() {
        let result = load_from_buffer_with("[Server\nHost=x\n", &files());
        let error = result.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_unknown_section_is_tolerated() {
        assert!(load("[Extra]\nSomething=1\n").is_ok());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = sample();
        let copy = original.clone();
        assert_eq!(copy, original);

        let snapshot = original.clone();
        drop(copy);
        assert_eq!(original, snapshot);
        assert_eq!(original.modules(), &["capture", "demo"]);
    }

    #[test]
    fn test_clone_twice_compares_equal() {
        let original = sample();
        let first = original.clone();
        let second = first.clone();
        assert_eq!(first, second);
        assert_eq!(
            second.channels.passthrough.iter().collect::<Vec<_>>(),
            vec!["rdpdr", "rdpsnd"]
        );
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let cert = temp_dir.path().join("server.crt");
        let key = temp_dir.path().join("server.key");
        fs::write(&cert, "cert").unwrap();
        fs::write(&key, "key").unwrap();

        let config_path = temp_dir.path().join("proxy.ini");
        fs::write(
            &config_path,
            format!(
                "[Server]\nHost=127.0.0.1\nPort=3389\n\
                 [Certificates]\nCertificateFile={}\nPrivateKeyFile={}\nRdpKeyFile={}\n",
                cert.display(),
                key.display(),
                key.display()
            ),
        )
        .unwrap();

        let config = load_from_file(&config_path).unwrap();
        assert_eq!(config.server.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(config.certificates.certificate, KeyMaterial::File(cert));
    }

    #[test]
    fn test_load_from_missing_file_is_parse_error() {
        let result = load_from_file(&PathBuf::from("/nonexistent/rdproxy/proxy.ini"));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
