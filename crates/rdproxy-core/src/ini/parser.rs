use std::fs;
use std::path::Path;

use tracing::debug;

use crate::ini::{IniError, KeyValueSource};

#[derive(Debug, Clone, Default)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    fn set(&mut self, key: &str, value: &str) {
        match self
            .entries
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
        {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }
}

/// Parsed INI document.
///
/// Section and key names are matched case-insensitively. A repeated section
/// header continues the earlier section; a repeated key overwrites the
/// earlier value.
#[derive(Debug, Clone, Default)]
pub struct IniFile {
    sections: Vec<Section>,
}

impl IniFile {
    /// Parse INI text held in memory.
    pub fn read_buffer(buffer: &str) -> Result<Self, IniError> {
        let mut ini = IniFile::default();
        let mut current: Option<usize> = None;

        let buffer = buffer.strip_prefix('\u{feff}').unwrap_or(buffer);

        for (index, raw_line) in buffer.lines().enumerate() {
            let line_no = index + 1;
            let line = raw_line.trim();

            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if let Some(rest) = line.strip_prefix('[') {
                let (name, _) = rest.split_once(']').ok_or_else(|| IniError::Syntax {
                    line: line_no,
                    message: format!("unterminated section header '{}'", line),
                })?;
                let name = name.trim();
                if name.is_empty() {
                    return Err(IniError::Syntax {
                        line: line_no,
                        message: "empty section name".to_string(),
                    });
                }
                current = Some(ini.section_index(name));
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(IniError::Syntax {
                    line: line_no,
                    message: format!("expected 'key=value', got '{}'", line),
                });
            };

            let key = key.trim();
            if key.is_empty() {
                return Err(IniError::Syntax {
                    line: line_no,
                    message: "empty key name".to_string(),
                });
            }

            let Some(section) = current else {
                return Err(IniError::Syntax {
                    line: line_no,
                    message: format!("key '{}' appears before any section", key),
                });
            };

            ini.sections[section].set(key, value.trim());
        }

        debug!(
            event = "core.ini.parse_completed",
            sections = ini.sections.len()
        );

        Ok(ini)
    }

    /// Read and parse an INI file from disk.
    pub fn read_file(path: &Path) -> Result<Self, IniError> {
        let content = fs::read_to_string(path).map_err(|source| IniError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::read_buffer(&content)
    }

    /// Section names in the order they first appeared.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    fn section_index(&mut self, name: &str) -> usize {
        if let Some(pos) = self
            .sections
            .iter()
            .position(|s| s.name.eq_ignore_ascii_case(name))
        {
            return pos;
        }
        self.sections.push(Section {
            name: name.to_string(),
            entries: Vec::new(),
        });
        self.sections.len() - 1
    }
}

impl KeyValueSource for IniFile {
    fn get_string(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(section))
            .and_then(|s| s.get(key))
    }
}

/// Read an integer the way `strtol(value, NULL, 0)` does.
///
/// Leading whitespace and a sign are accepted, `0x` selects hex and a leading
/// `0` selects octal, and parsing stops at the first non-digit. Input with no
/// digits, or a value that does not fit in an `i32`, reads as 0.
pub fn parse_int(value: &str) -> i32 {
    let s = value.trim_start();
    let (negative, s) = match s.as_bytes().first().copied() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
    {
        if hex.chars().next().is_some_and(|c| c.is_ascii_hexdigit()) {
            (16, hex)
        } else {
            (10, "0")
        }
    } else if s.len() > 1 && s.starts_with('0') {
        (8, &s[1..])
    } else {
        (10, s)
    };

    let mut acc: i64 = 0;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            break;
        };
        acc = match acc
            .checked_mul(i64::from(radix))
            .and_then(|v| v.checked_add(i64::from(digit)))
        {
            Some(v) => v,
            None => return 0,
        };
    }

    let signed = if negative { -acc } else { acc };
    i32::try_from(signed).unwrap_or(0)
}
