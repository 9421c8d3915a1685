/// What to do with the record's OS list after a parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsResolution {
    /// No usable OS entries were parsed; the existing list stays.
    Keep,
    /// The existing list was still default and is replaced.
    Replace(Vec<String>),
    /// Entries were parsed but the record already has real OS data; the existing list stays.
    Conflict,
}

/// An OS list is still default when it is empty or holds exactly one placeholder entry.
pub fn is_default_os(existing: &[String], placeholders: &[String]) -> bool {
    match existing {
        [] => true,
        [only] => placeholders.iter().any(|p| p == only),
        _ => false,
    }
}

pub fn resolve_os(existing: &[String], candidate: Vec<String>, placeholders: &[String]) -> OsResolution {
    if candidate.is_empty() {
        OsResolution::Keep
    } else if is_default_os(existing, placeholders) {
        OsResolution::Replace(candidate)
    } else {
        OsResolution::Conflict
    }
}

/// Parsed value if there is one, otherwise the current value.
pub fn merge_field(extracted: Option<String>, current: &str) -> String {
    extracted.unwrap_or_else(|| current.to_string())
}
