use std::path::PathBuf;

use tracing::error;

use crate::config::defaults;
use crate::config::fields::{FieldReader, KeyMaterialField};
use crate::config::types::{CertificatesConfig, KeyMaterial};
use crate::errors::ConfigError;
use crate::files::FileProbe;

/// `[Certificates]`: each of the three artifacts must be given exactly once,
/// either as an existing file or as non-empty inline content.
pub fn load_certificates(
    reader: &FieldReader<'_>,
    files: &dyn FileProbe,
) -> Result<CertificatesConfig, ConfigError> {
    Ok(CertificatesConfig {
        certificate: load_key_material(reader, files, &defaults::CERTIFICATE)?,
        private_key: load_key_material(reader, files, &defaults::PRIVATE_KEY)?,
        rdp_key: load_key_material(reader, files, &defaults::RDP_KEY)?,
    })
}

fn load_key_material(
    reader: &FieldReader<'_>,
    files: &dyn FileProbe,
    field: &KeyMaterialField,
) -> Result<KeyMaterial, ConfigError> {
    let path = reader.string(field.file, false)?.map(PathBuf::from);
    if let Some(path) = &path
        && !files.exists(path)
    {
        error!(
            event = "core.config.key_file_missing",
            section = field.file.section,
            key = field.file.name,
            path = %path.display()
        );
        return Err(ConfigError::FileNotFound {
            section: field.file.section,
            key: field.file.name,
            path: path.clone(),
        });
    }

    let content = reader.string(field.content, false)?;
    if content == Some("") {
        error!(
            event = "core.config.key_content_empty",
            section = field.content.section,
            key = field.content.name
        );
        return Err(ConfigError::EmptyContent {
            section: field.content.section,
            key: field.content.name,
        });
    }

    match (path, content) {
        (Some(path), None) => Ok(KeyMaterial::File(path)),
        (None, Some(content)) => Ok(KeyMaterial::Content(content.to_string())),
        (Some(_), Some(_)) => {
            error!(
                event = "core.config.key_material_conflict",
                section = field.file.section,
                file_key = field.file.name,
                content_key = field.content.name
            );
            Err(ConfigError::MutuallyExclusive {
                section: field.file.section,
                file_key: field.file.name,
                content_key: field.content.name,
            })
        }
        (None, None) => {
            error!(
                event = "core.config.key_material_missing",
                section = field.file.section,
                file_key = field.file.name,
                content_key = field.content.name
            );
            Err(ConfigError::MissingOneOf {
                section: field.file.section,
                file_key: field.file.name,
                content_key: field.content.name,
            })
        }
    }
}
