//! Address and list-field checks the dashboard applies before saving a record.

use once_cell::sync::Lazy;
use regex::Regex;

static IPV4: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{1,3}\.){3}[0-9]{1,3}$").expect("valid ipv4 regex"));

/// Six hex octets, each pair optionally separated by `:` or `-`.
static MAC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9A-F]{2}(?:[-:]?[0-9A-F]{2}){5}$").expect("valid mac regex")
});

pub const MSG_INVALID_IP: &str = "IP Address format is invalid (e.g., 192.168.1.1).";
pub const MSG_INVALID_MAC: &str = "MAC Address format is invalid (e.g., A1:B2:C3:D4:E5:F6).";

/// Dotted-quad IPv4 with every octet in 0..=255. Blank input is accepted.
pub fn validate_ip_address(ip: &str) -> bool {
    if ip.trim().is_empty() {
        return true;
    }
    if !IPV4.is_match(ip) {
        return false;
    }
    ip.split('.').all(|octet| octet.parse::<u16>().is_ok_and(|n| n <= 255))
}

/// Blank input is accepted.
pub fn validate_mac_address(mac: &str) -> bool {
    mac.trim().is_empty() || MAC.is_match(mac)
}

/// Comma-separated tag list, trimmed, empties dropped.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
