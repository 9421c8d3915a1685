//! Best-effort extraction of record fields from pasted system-info text
//! (Windows "About" / msinfo32 screens, `lshw`, `hostnamectl` and similar).
//!
//! Lines that cannot be recognized are skipped; the worst case is an update
//! that carries every field through unchanged.

pub mod field_map;
pub mod merge;
pub mod reducers;
pub mod tokenize;

use serde::Serialize;
use shared::protocol::{msg_parsed, MSG_NO_INPUT, MSG_OS_CONFLICT};
use shared::types::{SystemSnapshot, SystemUpdate};
use crate::config::ParserConfig;
use field_map::TargetField;
use merge::{merge_field, resolve_os, OsResolution};
use reducers::{normalize_mac, FirstMatch, OsReducer, SpecsReducer};

/// How a parse ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Nothing was pasted; no update.
    NoInput,
    /// Fields were merged, including the OS list when it applied.
    Applied,
    /// Fields were merged, but parsed OS entries were discarded because the record has real OS data.
    OsConflict,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extraction {
    pub updates: SystemUpdate,
    pub outcome: Outcome,
    pub message: String,
}

impl Extraction {
    /// Whether applying the updates would alter any field of `snapshot`.
    pub fn changed(&self, snapshot: &SystemSnapshot) -> bool {
        let mut merged = snapshot.clone();
        self.updates.apply_to_snapshot(&mut merged);
        merged != *snapshot
    }
}

/// Values gathered from one report, before merging with the record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub name: Option<String>,
    pub model: Option<String>,
    pub specs: Option<String>,
    pub mac_address: Option<String>,
    /// Deduplicated and filtered; empty if nothing usable was found.
    pub os: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SystemInfoExtractor {
    config: ParserConfig,
}

impl SystemInfoExtractor {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Run every recognized line through its field's reducer.
    pub fn collect(&self, raw: &str) -> ExtractedFields {
        let mut name = FirstMatch::default();
        let mut model = FirstMatch::default();
        let mut mac_address = FirstMatch::default();
        let mut specs = SpecsReducer::default();
        let mut os = OsReducer::default();

        for kv in tokenize::key_values(raw) {
            let Some(field) = field_map::lookup(&kv.key) else {
                tracing::trace!("Ignoring unmapped key {:?}", kv.key);
                continue;
            };
            tracing::debug!("Matched {:?} -> {:?}: {}", kv.key, field, kv.value);

            match field {
                TargetField::Name => {
                    name.offer(kv.value);
                }
                TargetField::Model => {
                    model.offer(kv.value);
                }
                TargetField::MacAddress => {
                    mac_address.offer(normalize_mac(&kv.value));
                }
                TargetField::Specs(_) => specs.offer(&kv.key, kv.value),
                TargetField::Os => os.offer(kv.value),
            }
        }

        ExtractedFields {
            name: name.into_inner(),
            model: model.into_inner(),
            specs: specs.finish(),
            mac_address: mac_address.into_inner(),
            os: os.finish(&self.config),
        }
    }

    /// Parse `raw` and merge the result over `target`.
    pub fn extract(&self, raw: &str, target: &SystemSnapshot) -> Extraction {
        if raw.trim().is_empty() {
            tracing::info!("No system info supplied, skipping parse");
            return Extraction {
                updates: SystemUpdate::default(),
                outcome: Outcome::NoInput,
                message: MSG_NO_INPUT.to_string(),
            };
        }

        let fields = self.collect(raw);

        let (os, outcome) = match resolve_os(&target.os, fields.os, &self.config.placeholder_os) {
            OsResolution::Replace(os) => (os, Outcome::Applied),
            OsResolution::Keep => (target.os.clone(), Outcome::Applied),
            OsResolution::Conflict => {
                tracing::warn!(
                    "Existing OS data on {:?} left untouched: {:?}",
                    target.name,
                    target.os
                );
                (target.os.clone(), Outcome::OsConflict)
            }
        };

        let updates = SystemUpdate {
            name: Some(merge_field(fields.name, &target.name)),
            model: Some(merge_field(fields.model, &target.model)),
            specs: Some(merge_field(fields.specs, &target.specs)),
            mac_address: Some(merge_field(fields.mac_address, &target.mac_address)),
            os: Some(os),
        };

        let message = match outcome {
            Outcome::OsConflict => MSG_OS_CONFLICT.to_string(),
            _ => msg_parsed(updates.name.as_deref().unwrap_or(&target.name)),
        };

        tracing::info!("Parsed system info for {:?} ({:?})", updates.name, outcome);

        Extraction {
            updates,
            outcome,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOWS_ABOUT: &str = "\
Device specifications

Device name    DESKTOP-4F2K9QZ
Processor    Intel(R) Core(TM) i7-1185G7 @ 3.00GHz (8 CPUs)
Installed RAM    32.0 GB (31.7 GB usable)
Device ID    1C2B3A4D-0000-1111-2222-333344445555
Product ID    00330-80000-00000-AA123
System type    64-bit operating system, x64-based processor
Pen and touch    No pen or touch input is available for this display

Windows specifications

Edition    Windows 11 Pro
Version    23H2
Installed on    1/5/2024
OS build    22631.3007
";

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn snapshot(os: &[&str]) -> SystemSnapshot {
        SystemSnapshot {
            name: "Example Workstation (Rename Me)".to_string(),
            model: "Custom Build 2024".to_string(),
            specs: "Ryzen 7 7700X, 64GB DDR5, RTX 4070 Ti".to_string(),
            mac_address: "AA:BB:CC:DD:EE:03".to_string(),
            os: strings(os),
        }
    }

    fn merged(target: &SystemSnapshot, extraction: &Extraction) -> SystemSnapshot {
        let mut merged = target.clone();
        extraction.updates.apply_to_snapshot(&mut merged);
        merged
    }

    #[test]
    fn test_windows_about_screen() {
        let extractor = SystemInfoExtractor::default();
        let target = snapshot(&["New OS"]);
        let result = extractor.extract(WINDOWS_ABOUT, &target);

        assert_eq!(result.outcome, Outcome::Applied);
        assert_eq!(result.updates.name.as_deref(), Some("DESKTOP-4F2K9QZ"));
        assert_eq!(
            result.updates.specs.as_deref(),
            Some("Intel Core i7-1185G7 @ 3.00GHz | 32.0 GB")
        );
        assert_eq!(result.updates.model.as_deref(), Some("Custom Build 2024"));
        assert_eq!(result.updates.mac_address.as_deref(), Some("AA:BB:CC:DD:EE:03"));
        assert_eq!(
            result.updates.os,
            Some(strings(&["Windows 11 Pro", "23H2"]))
        );
        assert_eq!(
            result.message,
            "Successfully parsed and updated fields for DESKTOP-4F2K9QZ!"
        );
    }

    #[test]
    fn test_empty_input() {
        let extractor = SystemInfoExtractor::default();
        let target = snapshot(&["New OS"]);

        for raw in ["", "   \n\t\n  "] {
            let result = extractor.extract(raw, &target);
            assert_eq!(result.outcome, Outcome::NoInput);
            assert!(result.updates.is_empty());
            assert_eq!(result.message, "Paste some data first.");
            assert!(!result.changed(&target));
        }
    }

    #[test]
    fn test_first_match_wins_for_name() {
        let extractor = SystemInfoExtractor::default();
        let raw = "Device Name    Alpha\nDevice Name    Beta\n";
        let result = extractor.extract(raw, &snapshot(&[]));
        assert_eq!(result.updates.name.as_deref(), Some("Alpha"));
    }

    #[test]
    fn test_specs_join_order() {
        let extractor = SystemInfoExtractor::default();
        let raw = "Installed RAM    32.0 GB\nProcessor    Intel(R) Core(TM) i7-1185G7 @ 3.00GHz (8 CPUs)\n";
        let result = extractor.extract(raw, &snapshot(&[]));
        assert_eq!(
            result.updates.specs.as_deref(),
            Some("Intel Core i7-1185G7 @ 3.00GHz | 32.0 GB")
        );
    }

    #[test]
    fn test_mac_colon_input() {
        let extractor = SystemInfoExtractor::default();
        let result = extractor.extract("MAC Address: A1:B2:C3:D4:E5:F6", &snapshot(&[]));
        assert_eq!(result.updates.mac_address.as_deref(), Some("A1:B2:C3:D4:E5:F6"));
    }

    #[test]
    fn test_mac_dash_input_is_stripped() {
        let extractor = SystemInfoExtractor::default();
        let result = extractor.extract("MAC Address: a1-b2-c3-d4-e5-f6", &snapshot(&[]));
        assert_eq!(result.updates.mac_address.as_deref(), Some("A1B2C3D4E5F6"));
    }

    #[test]
    fn test_os_guard_protects_existing_list() {
        let extractor = SystemInfoExtractor::default();
        let target = snapshot(&["Windows 11 Pro"]);
        let raw = "Device name    NEWHOST\nOS Name    Ubuntu 22.04\n";
        let result = extractor.extract(raw, &target);

        assert_eq!(result.outcome, Outcome::OsConflict);
        assert_eq!(result.updates.os, Some(strings(&["Windows 11 Pro"])));
        assert_eq!(
            result.message,
            "Fields parsed, but found existing OS data. Check OS list manually."
        );
        // Other fields still apply.
        assert_eq!(result.updates.name.as_deref(), Some("NEWHOST"));
    }

    #[test]
    fn test_os_guard_replaces_placeholder() {
        let extractor = SystemInfoExtractor::default();
        let target = snapshot(&["New OS"]);
        let result = extractor.extract("OS Name    Ubuntu 22.04", &target);

        assert_eq!(result.outcome, Outcome::Applied);
        assert_eq!(result.updates.os, Some(strings(&["Ubuntu 22.04"])));
        assert_eq!(
            result.message,
            "Successfully parsed and updated fields for Example Workstation (Rename Me)!"
        );
    }

    #[test]
    fn test_os_guard_uses_configured_placeholders() {
        let extractor = SystemInfoExtractor::new(ParserConfig {
            placeholder_os: strings(&["TBD"]),
            ..ParserConfig::default()
        });

        let result = extractor.extract("OS Name    Debian 12", &snapshot(&["TBD"]));
        assert_eq!(result.updates.os, Some(strings(&["Debian 12"])));

        let result = extractor.extract("OS Name    Debian 12", &snapshot(&["New OS"]));
        assert_eq!(result.outcome, Outcome::OsConflict);
    }

    #[test]
    fn test_only_noise_os_keeps_existing_without_warning() {
        let extractor = SystemInfoExtractor::default();
        let target = snapshot(&["Windows 11 Pro"]);
        let raw = "System type    64-bit operating system\nVersion    11\n";
        let result = extractor.extract(raw, &target);

        assert_eq!(result.outcome, Outcome::Applied);
        assert_eq!(result.updates.os, Some(strings(&["Windows 11 Pro"])));
    }

    #[test]
    fn test_dedupe_and_bitness_filter() {
        let extractor = SystemInfoExtractor::default();
        let raw = "\
System type    64-bit operating system
Edition    Windows 11 Pro
System type    64-bit operating system
";
        let fields = extractor.collect(raw);
        assert_eq!(fields.os, strings(&["Windows 11 Pro"]));
    }

    #[test]
    fn test_pass_through_when_nothing_matches() {
        let extractor = SystemInfoExtractor::default();
        let target = snapshot(&["Windows 11 Pro"]);
        let raw = "random text\nProduct ID    00330-80000\n---\n";
        let result = extractor.extract(raw, &target);

        assert_eq!(result.outcome, Outcome::Applied);
        assert_eq!(merged(&target, &result), target);
        assert!(!result.changed(&target));
        assert_eq!(
            result.message,
            "Successfully parsed and updated fields for Example Workstation (Rename Me)!"
        );
    }

    #[test]
    fn test_spaced_colon_label_does_not_map() {
        let extractor = SystemInfoExtractor::default();
        let target = snapshot(&["New OS"]);

        let spaced = extractor.extract("OS Name:    Ubuntu 22.04", &target);
        assert_eq!(spaced.updates.os, Some(strings(&["New OS"])));

        let tight = extractor.extract("OS Name: Ubuntu 22.04", &target);
        assert_eq!(tight.updates.os, Some(strings(&["Ubuntu 22.04"])));
    }

    #[test]
    fn test_lshw_style_colon_lines() {
        let extractor = SystemInfoExtractor::default();
        let raw = "\
pi4
    description: Computer
    product: Raspberry Pi 4 Model B Rev 1.4
  *-cpu:0
       description: CPU
       product: cpu
       capabilities: half thumb fastmult
Host name: pi4
CPU: ARMv7 Processor rev 3 (v7l)
Ethernet address: dc:a6:32:01:02:03
";
        let result = extractor.extract(raw, &snapshot(&["Raspberry Pi OS Lite"]));

        assert_eq!(result.updates.name.as_deref(), Some("pi4"));
        assert_eq!(result.updates.specs.as_deref(), Some("ARMv7 Processor rev 3"));
        assert_eq!(result.updates.mac_address.as_deref(), Some("DC:A6:32:01:02:03"));
        assert_eq!(result.updates.os, Some(strings(&["Raspberry Pi OS Lite"])));
    }

    #[test]
    fn test_reparse_is_idempotent() {
        let extractor = SystemInfoExtractor::default();
        let target = snapshot(&["New OS"]);

        let first = extractor.extract(WINDOWS_ABOUT, &target);
        let once = merged(&target, &first);

        let second = extractor.extract(WINDOWS_ABOUT, &once);
        let twice = merged(&once, &second);

        assert_eq!(once, twice);
        assert!(!second.changed(&once));
        // The OS list is no longer default after the first parse.
        assert_eq!(second.outcome, Outcome::OsConflict);
    }

    #[test]
    fn test_windows_line_endings() {
        let extractor = SystemInfoExtractor::default();
        let raw = "Device name    HOST-A\r\nSystem Model    OptiPlex 7090\r\n";
        let result = extractor.extract(raw, &snapshot(&[]));
        assert_eq!(result.updates.name.as_deref(), Some("HOST-A"));
        assert_eq!(result.updates.model.as_deref(), Some("OptiPlex 7090"));
    }
}
