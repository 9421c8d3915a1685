use once_cell::sync::Lazy;
use regex::Regex;

/// Columnar "About this PC" layout: label, a run of two or more whitespace characters, value.
static SPACED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s{2,}([A-Za-z0-9].*)$").expect("valid spaced-line regex"));

/// "Label: value" layout, tried only when the columnar form does not match.
static COLON_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?):\s*([A-Za-z0-9].*)$").expect("valid colon-line regex"));

/// Registration and trademark marks, matched against an already lower-cased label.
static KEY_DECORATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(r\)|\(tm\)|[™®]").expect("valid decoration regex"));

/// One recognized `label <sep> value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

/// Non-blank, trimmed lines of a pasted report. Accepts `\n`, `\r\n` and bare `\r`.
pub fn lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Lower-case a label and strip its trademark decoration.
pub fn normalize_key(label: &str) -> String {
    let lowered = label.trim().to_lowercase();
    KEY_DECORATION.replace_all(&lowered, "").trim().to_string()
}

/// Split a single trimmed line into a key/value pair, or `None` if it has neither layout.
pub fn split_line(line: &str) -> Option<KeyValue> {
    let caps = SPACED_LINE
        .captures(line)
        .or_else(|| COLON_LINE.captures(line))?;

    let key = normalize_key(&caps[1]);
    let value = caps[2].trim().to_string();
    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some(KeyValue { key, value })
}

/// Every recognized key/value pair in the report, in line order.
pub fn key_values(raw: &str) -> Vec<KeyValue> {
    lines(raw)
        .filter_map(|line| {
            let kv = split_line(line);
            if kv.is_none() {
                tracing::trace!("No key/value layout in line: {:?}", line);
            }
            kv
        })
        .collect()
}
