use std::collections::{HashMap, HashSet};
use once_cell::sync::Lazy;
use regex::Regex;
use shared::protocol::SPECS_SEPARATOR;
use crate::config::ParserConfig;
use super::field_map::{KEY_CPU, KEY_INSTALLED_RAM, KEY_PHYSICAL_MEMORY, KEY_PROCESSOR};

static VALUE_DECORATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\(r\)|\(tm\)|[™®]").expect("valid decoration regex"));

/// A parenthesized annotation at the end of a value, e.g. " (8 CPUs)" or " (15.7 GB usable)".
static TRAILING_ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\([^()]*\)$").expect("valid annotation regex"));

/// Keeps the first non-empty value offered and ignores the rest.
#[derive(Debug, Default)]
pub struct FirstMatch {
    value: Option<String>,
}

impl FirstMatch {
    /// Returns true if the value was taken.
    pub fn offer(&mut self, value: String) -> bool {
        if self.value.is_some() || value.is_empty() {
            return false;
        }
        self.value = Some(value);
        true
    }

    pub fn into_inner(self) -> Option<String> {
        self.value
    }
}

/// Upper-case and drop everything that is not a hex digit or a colon.
pub fn normalize_mac(value: &str) -> String {
    value
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_hexdigit() || *c == ':')
        .collect()
}

/// Collects processor and memory values per normalized key and joins them at the end.
#[derive(Debug, Default)]
pub struct SpecsReducer {
    by_key: HashMap<String, String>,
}

impl SpecsReducer {
    /// A repeated key replaces the earlier value for that key.
    pub fn offer(&mut self, key: &str, value: String) {
        self.by_key.insert(key.to_string(), value);
    }

    fn preferred(&self, primary: &str, fallback: &str) -> Option<&str> {
        self.by_key
            .get(primary)
            .or_else(|| self.by_key.get(fallback))
            .map(String::as_str)
    }

    /// `"<processor> | <memory>"`, either part alone, or `None` if neither was seen.
    pub fn finish(self) -> Option<String> {
        let parts: Vec<String> = [
            self.preferred(KEY_PROCESSOR, KEY_CPU),
            self.preferred(KEY_INSTALLED_RAM, KEY_PHYSICAL_MEMORY),
        ]
        .into_iter()
        .flatten()
        .map(clean_spec_value)
        .filter(|part| !part.is_empty())
        .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(SPECS_SEPARATOR))
        }
    }
}

/// Strip trademark marks and a trailing parenthesized annotation.
pub fn clean_spec_value(value: &str) -> String {
    let undecorated = VALUE_DECORATION.replace_all(value, "");
    TRAILING_ANNOTATION
        .replace(undecorated.trim(), "")
        .trim()
        .to_string()
}

/// Gathers every OS candidate in encounter order, duplicates included.
#[derive(Debug, Default)]
pub struct OsReducer {
    raw: Vec<String>,
}

impl OsReducer {
    pub fn offer(&mut self, value: String) {
        self.raw.push(value);
    }

    /// Stable dedupe, then drop short entries and bitness tags.
    pub fn finish(self, config: &ParserConfig) -> Vec<String> {
        let mut seen = HashSet::new();
        self.raw
            .into_iter()
            .filter(|entry| seen.insert(entry.clone()))
            .filter(|entry| !is_os_noise(entry, config))
            .collect()
    }
}

fn is_os_noise(entry: &str, config: &ParserConfig) -> bool {
    if entry.chars().count() < config.min_os_entry_len {
        return true;
    }
    let lowered = entry.to_lowercase();
    config
        .os_noise_markers
        .iter()
        .any(|marker| lowered.contains(&marker.to_lowercase()))
}
