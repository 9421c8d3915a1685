/// Part of the specs line a key contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecComponent {
    Processor,
    Memory,
}

/// The record field a normalized key feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetField {
    Name,
    Model,
    Specs(SpecComponent),
    MacAddress,
    Os,
}

pub const KEY_PROCESSOR: &str = "processor";
pub const KEY_CPU: &str = "cpu";
pub const KEY_INSTALLED_RAM: &str = "installed ram";
pub const KEY_PHYSICAL_MEMORY: &str = "installed physical memory (ram)";

/// Normalized label to target field. Keys are already lower-case.
static FIELD_MAP: &[(&str, TargetField)] = &[
    ("device name", TargetField::Name),
    ("host name", TargetField::Name),
    ("system model", TargetField::Model),
    ("baseboard product", TargetField::Model),
    (KEY_PROCESSOR, TargetField::Specs(SpecComponent::Processor)),
    (KEY_CPU, TargetField::Specs(SpecComponent::Processor)),
    (KEY_INSTALLED_RAM, TargetField::Specs(SpecComponent::Memory)),
    (KEY_PHYSICAL_MEMORY, TargetField::Specs(SpecComponent::Memory)),
    ("mac address", TargetField::MacAddress),
    ("ethernet address", TargetField::MacAddress),
    ("system type", TargetField::Os),
    ("edition", TargetField::Os),
    ("os name", TargetField::Os),
    ("version", TargetField::Os),
];

pub fn lookup(normalized_key: &str) -> Option<TargetField> {
    FIELD_MAP
        .iter()
        .find(|(key, _)| *key == normalized_key)
        .map(|(_, field)| *field)
}
