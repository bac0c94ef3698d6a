use std::fmt;

use serde::Serialize;

/// Ordered list of names read from a comma-separated value.
///
/// Used for passthrough channels, plugin modules and required plugins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NameList(Vec<String>);

impl NameList {
    /// Split a comma-separated value into names.
    ///
    /// An absent or empty value yields an empty list. Names keep their source
    /// order with surrounding whitespace trimmed; duplicates and empty names
    /// between adjacent commas are kept.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Self::default(),
            Some(raw) => Self(raw.split(',').map(|s| s.trim().to_string()).collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for NameList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Renders the list back to its comma-separated form.
impl fmt::Display for NameList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}
