//! Typed lookups over a [`KeyValueSource`].
//!
//! Fields are described by small `const` descriptors (see
//! [`defaults`](crate::config::defaults)) and read through [`FieldReader`],
//! which applies the required/optional rules and reports every failure with
//! its section and key.

use tracing::{error, warn};

use crate::errors::ConfigError;
use crate::ini::KeyValueSource;

/// Location of a value: `[section] name=...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub section: &'static str,
    pub name: &'static str,
}

impl Key {
    pub const fn new(section: &'static str, name: &'static str) -> Self {
        Self { section, name }
    }
}

/// A boolean field and the value it takes when the key is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolField {
    pub key: Key,
    pub default: bool,
}

impl BoolField {
    pub const fn new(section: &'static str, name: &'static str, default: bool) -> Self {
        Self {
            key: Key::new(section, name),
            default,
        }
    }
}

/// A certificate or key given either as a path (`file`) or inline (`content`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMaterialField {
    pub file: Key,
    pub content: Key,
}

impl KeyMaterialField {
    pub const fn new(
        section: &'static str,
        file_key: &'static str,
        content_key: &'static str,
    ) -> Self {
        Self {
            file: Key::new(section, file_key),
            content: Key::new(section, content_key),
        }
    }
}

/// Typed, validated access to a key/value source.
pub struct FieldReader<'a> {
    source: &'a dyn KeyValueSource,
}

impl<'a> FieldReader<'a> {
    pub fn new(source: &'a dyn KeyValueSource) -> Self {
        Self { source }
    }

    /// Raw value without any required/optional handling.
    pub fn raw(&self, key: Key) -> Option<&'a str> {
        self.source.get_string(key.section, key.name)
    }

    /// String value. Fails only when `required` and the key is absent.
    pub fn string(&self, key: Key, required: bool) -> Result<Option<&'a str>, ConfigError> {
        match self.raw(key) {
            Some(value) => Ok(Some(value)),
            None if required => {
                error!(
                    event = "core.config.key_missing",
                    section = key.section,
                    key = key.name
                );
                Err(ConfigError::MissingKey {
                    section: key.section,
                    key: key.name,
                })
            }
            None => Ok(None),
        }
    }

    /// Boolean value.
    ///
    /// A case-insensitive `TRUE` is true. Any other value is read as an
    /// integer and is true unless that integer is exactly 1.
    pub fn flag(&self, field: &BoolField) -> bool {
        let key = field.key;
        let Some(value) = self.raw(key) else {
            warn!(
                event = "core.config.key_defaulted",
                section = key.section,
                key = key.name,
                default = field.default
            );
            return field.default;
        };

        if value.eq_ignore_ascii_case("TRUE") {
            return true;
        }

        // Kept as deployed: a numeric 1 reads as false, everything else as true.
        let number = self.source.get_int(key.section, key.name).unwrap_or(0);
        number != 1
    }

    /// Port-style value in 1..=65535.
    pub fn uint16(&self, key: Key, required: bool) -> Result<Option<u16>, ConfigError> {
        let Some(value) = self.int_in_range(key, required, 1, i64::from(u16::MAX))? else {
            return Ok(None);
        };
        u16::try_from(value)
            .map(Some)
            .map_err(|_| invalid_value(key, value, 1, i64::from(u16::MAX)))
    }

    /// Non-negative value in 0..=i32::MAX.
    pub fn uint32(&self, key: Key, required: bool) -> Result<Option<u32>, ConfigError> {
        let Some(value) = self.int_in_range(key, required, 0, i64::from(i32::MAX))? else {
            return Ok(None);
        };
        u32::try_from(value)
            .map(Some)
            .map_err(|_| invalid_value(key, value, 0, i64::from(i32::MAX)))
    }

    fn int_in_range(
        &self,
        key: Key,
        required: bool,
        min: i64,
        max: i64,
    ) -> Result<Option<i32>, ConfigError> {
        if self.string(key, required)?.is_none() {
            return Ok(None);
        }

        let value = self.source.get_int(key.section, key.name).unwrap_or(0);
        if !(min..=max).contains(&i64::from(value)) {
            return Err(invalid_value(key, value, min, max));
        }
        Ok(Some(value))
    }
}

fn invalid_value(key: Key, value: i32, min: i64, max: i64) -> ConfigError {
    error!(
        event = "core.config.value_invalid",
        section = key.section,
        key = key.name,
        value = value,
        min = min,
        max = max
    );
    ConfigError::InvalidValue {
        section: key.section,
        key: key.name,
        value,
        min,
        max,
    }
}
