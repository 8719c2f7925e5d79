//! Parameter file parsing.
//!
//! The file is line oriented: each non-empty line is `name = value`. Values are
//! opaque literals that are later spliced verbatim into generated scripts, so
//! nothing here interprets them.

use crate::domain::AppError;

const SEPARATOR: &str = " = ";

/// One `name = value` line from the parameter file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub name: String,
    pub value: String,
    /// 1-based line number in the source file.
    pub line: usize,
}

impl ConfigEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>, line: usize) -> Self {
        Self { name: name.into(), value: value.into(), line }
    }
}

/// Parse parameter file content into entries, preserving file order.
///
/// Blank lines and `#` comment lines are skipped. A non-empty line without the
/// ` = ` separator is rejected rather than silently dropped.
pub fn parse_config_content(content: &str) -> Result<Vec<ConfigEntry>, AppError> {
    let mut entries = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((name, value)) = line.split_once(SEPARATOR) else {
            return Err(AppError::MalformedConfigLine {
                line: index + 1,
                content: line.to_string(),
            });
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::MalformedConfigLine {
                line: index + 1,
                content: line.to_string(),
            });
        }

        entries.push(ConfigEntry::new(name, value, index + 1));
    }

    Ok(entries)
}
