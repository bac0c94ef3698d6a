//! INI key/value source.
//!
//! The configuration loader only needs two lookups from its source: the raw
//! string stored under `section.key`, and the same value read as an integer.
//! [`KeyValueSource`] is that seam; [`IniFile`] implements it over INI text.

pub mod errors;
pub mod parser;

pub use errors::IniError;
pub use parser::{IniFile, parse_int};

/// Read-only key/value lookup used by the configuration loader.
pub trait KeyValueSource {
    /// Raw value of `section.key`, if the key exists.
    fn get_string(&self, section: &str, key: &str) -> Option<&str>;

    /// Value of `section.key` read as an integer.
    ///
    /// Returns `None` only when the key is absent. Present values that do not
    /// parse read as 0, the same way `strtol` would report them.
    fn get_int(&self, section: &str, key: &str) -> Option<i32> {
        self.get_string(section, key).map(parse_int)
    }
}
