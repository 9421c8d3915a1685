/// OS entries the dashboard writes into records that have not received real OS data yet
pub const PLACEHOLDER_OS: &[&str] = &["New OS", "Raspberry Pi OS Lite"];

/// Separator between the processor and memory parts of a parsed specs line
pub const SPECS_SEPARATOR: &str = " | ";

/// OS candidates of this many characters or fewer are treated as noise
pub const MAX_NOISE_OS_LEN: usize = 3;

/// Case-insensitive substrings that mark an OS candidate as a bitness tag
pub const OS_NOISE_MARKERS: &[&str] = &["64-bit"];

/// Message shown when the parser is invoked without any text
pub const MSG_NO_INPUT: &str = "Paste some data first.";

/// Message shown when parsed OS entries were discarded to protect existing data
pub const MSG_OS_CONFLICT: &str = "Fields parsed, but found existing OS data. Check OS list manually.";

/// Confirmation shown after a successful parse, naming the updated system
pub fn msg_parsed(system_name: &str) -> String {
    format!("Successfully parsed and updated fields for {}!", system_name)
}
