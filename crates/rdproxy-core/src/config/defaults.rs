//! Key names and default values for every configuration field.
//!
//! Each field the loader reads is declared here once as a descriptor. The
//! section loaders pass these descriptors to [`FieldReader`] instead of
//! repeating section/key strings and defaults inline.
//!
//! [`FieldReader`]: crate::config::fields::FieldReader

use crate::config::fields::{BoolField, Key, KeyMaterialField};

/// Maximum length of a static virtual channel name.
///
/// RDP channel names occupy 8 bytes on the wire including the terminating NUL.
pub const CHANNEL_NAME_LEN: usize = 7;

pub const SERVER: &str = "Server";
pub const TARGET: &str = "Target";
pub const CHANNELS: &str = "Channels";
pub const INPUT: &str = "Input";
pub const SECURITY: &str = "Security";
pub const CLIPBOARD: &str = "Clipboard";
pub const PLUGINS: &str = "Plugins";
pub const GFX_SETTINGS: &str = "GFXSettings";
pub const CERTIFICATES: &str = "Certificates";

// [Server]
pub const SERVER_HOST: Key = Key::new(SERVER, "Host");
pub const SERVER_PORT: Key = Key::new(SERVER, "Port");

// [Target]
pub const FIXED_TARGET: BoolField = BoolField::new(TARGET, "FixedTarget", false);
pub const TARGET_HOST: Key = Key::new(TARGET, "Host");
pub const TARGET_PORT: Key = Key::new(TARGET, "Port");

// [Channels]
pub const GFX: BoolField = BoolField::new(CHANNELS, "GFX", true);
pub const DISPLAY_CONTROL: BoolField = BoolField::new(CHANNELS, "DisplayControl", true);
pub const CLIPBOARD_CHANNEL: BoolField = BoolField::new(CHANNELS, "Clipboard", false);
pub const AUDIO_OUTPUT: BoolField = BoolField::new(CHANNELS, "AudioOutput", true);
pub const REMOTE_APP: BoolField = BoolField::new(CHANNELS, "RemoteApp", false);
pub const PASSTHROUGH: Key = Key::new(CHANNELS, "Passthrough");

// [Input]
pub const KEYBOARD: BoolField = BoolField::new(INPUT, "Keyboard", true);
pub const MOUSE: BoolField = BoolField::new(INPUT, "Mouse", true);

// [Security]
pub const SERVER_TLS_SECURITY: BoolField = BoolField::new(SECURITY, "ServerTlsSecurity", true);
pub const SERVER_RDP_SECURITY: BoolField = BoolField::new(SECURITY, "ServerRdpSecurity", true);
pub const CLIENT_TLS_SECURITY: BoolField = BoolField::new(SECURITY, "ClientTlsSecurity", true);
pub const CLIENT_NLA_SECURITY: BoolField = BoolField::new(SECURITY, "ClientNlaSecurity", true);
pub const CLIENT_RDP_SECURITY: BoolField = BoolField::new(SECURITY, "ClientRdpSecurity", true);
pub const CLIENT_ALLOW_FALLBACK_TO_TLS: BoolField =
    BoolField::new(SECURITY, "ClientAllowFallbackToTls", true);

// [Clipboard]
pub const TEXT_ONLY: BoolField = BoolField::new(CLIPBOARD, "TextOnly", false);
pub const MAX_TEXT_LENGTH: Key = Key::new(CLIPBOARD, "MaxTextLength");

// [Plugins]
pub const MODULES: Key = Key::new(PLUGINS, "Modules");
pub const REQUIRED_PLUGINS: Key = Key::new(PLUGINS, "Required");

// [GFXSettings]
pub const DECODE_GFX: BoolField = BoolField::new(GFX_SETTINGS, "DecodeGFX", false);

// [Certificates]
pub const CERTIFICATE: KeyMaterialField =
    KeyMaterialField::new(CERTIFICATES, "CertificateFile", "CertificateContent");
pub const PRIVATE_KEY: KeyMaterialField =
    KeyMaterialField::new(CERTIFICATES, "PrivateKeyFile", "PrivateKeyContent");
pub const RDP_KEY: KeyMaterialField =
    KeyMaterialField::new(CERTIFICATES, "RdpKeyFile", "RdpKeyContent");

/// Template written by `rdproxy dump-config`.
///
/// Keys whose default is `TRUE` are written out; keys that default to false
/// are left commented out so the default applies. Certificate paths are
/// relative to the working directory the proxy is started from.
pub const TEMPLATE: &str = "\
; RDP proxy configuration
; A key that is left out takes its default.

[Server]
Host=0.0.0.0
Port=3389

[Target]
; Connect every session to one fixed backend instead of resolving it per session.
;FixedTarget=TRUE
;Host=
;Port=

[Channels]
GFX=TRUE
DisplayControl=TRUE
;Clipboard=TRUE
AudioOutput=TRUE
;RemoteApp=TRUE
; Comma separated static channel names forwarded untouched (7 characters max each).
Passthrough=

[Input]
Keyboard=TRUE
Mouse=TRUE

[Security]
ServerTlsSecurity=TRUE
ServerRdpSecurity=TRUE
ClientTlsSecurity=TRUE
ClientNlaSecurity=TRUE
ClientRdpSecurity=TRUE
ClientAllowFallbackToTls=TRUE

[Clipboard]
;TextOnly=TRUE
; 0 leaves clipboard text unbounded.
MaxTextLength=0

[Plugins]
Modules=
Required=

[GFXSettings]
;DecodeGFX=TRUE

[Certificates]
; Give each of these either as *File or as *Content, never both.
CertificateFile=server.crt
PrivateKeyFile=server.key
RdpKeyFile=server.key
";
