//! Script parameter injection.
//!
//! Each target script carries a serialized parameter object such as
//!
//! ```text
//! "filter": '&fq=scope:edi', // Filter results
//! "limit": 2000,  // Max number of results
//! ```
//!
//! Injection replaces the literal after `"<name>": ` with the configured value,
//! verbatim, for every configuration entry the target accepts.

mod target;
mod value_span;

pub use target::InjectionTarget;
pub use value_span::value_end;

use std::ops::Range;

use regex::Regex;

use crate::domain::AppError;
use crate::domain::configuration::ConfigEntry;

/// Result of applying configuration entries to one target's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionReport {
    pub text: String,
    /// Names whose value was replaced, in application order.
    pub applied: Vec<String>,
    /// Accepted names with no comma-terminated `"<name>": ` entry in the text.
    pub missing: Vec<String>,
}

impl InjectionReport {
    /// Whether the text differs from `original`.
    pub fn changed(&self, original: &str) -> bool {
        self.text != original
    }
}

/// Apply every entry accepted by `target` to `text`, in order.
///
/// A name seen again in the same call overwrites exactly the span its previous
/// value was written to, whatever that value contains.
pub fn inject(
    text: &str,
    target: InjectionTarget,
    entries: &[ConfigEntry],
) -> Result<InjectionReport, AppError> {
    let mut text = text.to_string();
    let mut applied = Vec::new();
    let mut missing = Vec::new();
    let mut written: Vec<(String, Range<usize>)> = Vec::new();

    for entry in entries.iter().filter(|entry| target.accepts(&entry.name)) {
        let previous = written.iter().position(|(name, _)| *name == entry.name);
        let span = match previous {
            Some(index) => Some(written[index].1.clone()),
            None => locate_value(&text, &entry.name)?,
        };
        let Some(span) = span else {
            missing.push(entry.name.clone());
            continue;
        };

        text.replace_range(span.clone(), &entry.value);
        let new_end = span.start + entry.value.len();
        for (_, other) in written.iter_mut().filter(|(_, other)| other.start >= span.end) {
            *other = (other.start + new_end - span.end)..(other.end + new_end - span.end);
        }
        match previous {
            Some(index) => written[index].1 = span.start..new_end,
            None => written.push((entry.name.clone(), span.start..new_end)),
        }
        applied.push(entry.name.clone());
    }

    Ok(InjectionReport { text, applied, missing })
}

/// Replace the value of the first comma-terminated `"<key>": ` entry.
///
/// Returns `None` when the key does not occur with a bounded value.
pub fn replace_value(text: &str, key: &str, value: &str) -> Result<Option<String>, AppError> {
    Ok(locate_value(text, key)?.map(|span| {
        let mut updated = text.to_string();
        updated.replace_range(span, value);
        updated
    }))
}

/// Byte span of the value of the first comma-terminated `"<key>": ` entry.
///
/// When the lexical scan cannot bound the value (an earlier run may have
/// written an unbalanced or commented literal), the span runs to the last
/// comma on the key's line.
pub fn locate_value(text: &str, key: &str) -> Result<Option<Range<usize>>, AppError> {
    let pattern = key_pattern(key)?;

    for found in pattern.find_iter(text) {
        let start = found.end();
        if let Some(end) = value_end(text, start).or_else(|| last_comma_on_line(text, start)) {
            return Ok(Some(start..end));
        }
    }

    Ok(None)
}

fn last_comma_on_line(text: &str, start: usize) -> Option<usize> {
    let rest = &text[start..];
    let line = rest.find('\n').map_or(rest, |newline| &rest[..newline]);
    let comma = line.rfind(',')?;
    if line[..comma].trim().is_empty() {
        return None;
    }
    Some(start + comma)
}

fn key_pattern(key: &str) -> Result<Regex, AppError> {
    Regex::new(&format!(r#""{}":[ \t]"#, regex::escape(key))).map_err(|err| {
        AppError::InvalidParameterName { name: key.to_string(), details: err.to_string() }
    })
}
