use tracing::error;

use crate::config::defaults::{self, CHANNEL_NAME_LEN};
use crate::config::fields::FieldReader;
use crate::config::list::NameList;
use crate::config::types::ChannelsConfig;
use crate::errors::ConfigError;

/// `[Channels]`: channel switches plus the passthrough list.
///
/// Fails if any passthrough name is longer than [`CHANNEL_NAME_LEN`] bytes.
pub fn load_channels(reader: &FieldReader<'_>) -> Result<ChannelsConfig, ConfigError> {
    let channels = ChannelsConfig {
        gfx: reader.flag(&defaults::GFX),
        display_control: reader.flag(&defaults::DISPLAY_CONTROL),
        clipboard: reader.flag(&defaults::CLIPBOARD_CHANNEL),
        audio_output: reader.flag(&defaults::AUDIO_OUTPUT),
        remote_app: reader.flag(&defaults::REMOTE_APP),
        passthrough: NameList::parse(reader.string(defaults::PASSTHROUGH, false)?),
    };

    validate_channel_names(&channels.passthrough)?;

    Ok(channels)
}

fn validate_channel_names(names: &NameList) -> Result<(), ConfigError> {
    match names.iter().find(|name| name.len() > CHANNEL_NAME_LEN) {
        Some(name) => {
            error!(
                event = "core.config.channel_name_too_long",
                name = name,
                len = name.len(),
                max = CHANNEL_NAME_LEN
            );
            Err(ConfigError::ChannelNameTooLong {
                name: name.to_string(),
                len: name.len(),
                max: CHANNEL_NAME_LEN,
            })
        }
        None => Ok(()),
    }
}
