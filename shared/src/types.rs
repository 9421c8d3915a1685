use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked home-lab device.
/// This is the canonical record stored by the dashboard and read by the ingest tooling.
/// Field names follow the document store (camelCase); missing fields load as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct System {
    /// Document id, e.g. "example_server" or a random UUID
    pub id: String,

    /// Display name, e.g. "DESKTOP-4F2K9QZ"
    pub name: String,

    /// What the device is used for
    pub role: String,

    /// Hardware model, e.g. "Raspberry Pi 4"
    pub model: String,

    /// Free-form hardware summary, e.g. "i7, 32GB DDR4, 1TB NVMe"
    pub specs: String,

    /// Installed operating systems, in display order
    pub os: Vec<String>,

    pub ip_address: String,

    pub mac_address: String,

    /// Physical location, e.g. "Office Shelf"
    pub location: String,

    pub status: SystemStatus,

    pub performance_notes: String,

    pub accounts: Vec<Account>,

    pub software: Vec<Software>,

    pub services: Vec<Service>,

    /// Newest first
    pub performance_history: Vec<PerformanceLog>,

    pub custom_properties: Vec<CustomProperty>,

    pub tags: Vec<String>,
}

impl System {
    /// A freshly created record, as the dashboard's "add device" action builds it.
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: "New Device".to_string(),
            os: vec!["New OS".to_string()],
            status: SystemStatus::Active,
            ..Self::default()
        }
    }

    /// The parser-relevant view of this record
    pub fn snapshot(&self) -> SystemSnapshot {
        SystemSnapshot::from(self)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemStatus {
    #[default]
    Active,
    Maintenance,
    Decommissioned,
    Archived,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub name: String,
    pub username: String,
    /// Port or service label the account logs into
    pub service: String,
    pub protocol: Protocol,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Protocol {
    #[serde(rename = "SSH")]
    Ssh,
    #[serde(rename = "RDP")]
    Rdp,
    #[serde(rename = "HTTPS")]
    Https,
    Database,
    #[default]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Software {
    pub name: String,
    pub version: String,
    pub purpose: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Service {
    pub name: String,
    /// Bare port, host:port, or full URL
    pub port_url: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceLog {
    pub timestamp: DateTime<Utc>,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomProperty {
    pub key: String,
    pub value: String,
}

/// The fields of a [`System`] that the system-info parser reads and may overwrite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemSnapshot {
    pub name: String,
    pub model: String,
    pub specs: String,
    pub mac_address: String,
    pub os: Vec<String>,
}

impl From<&System> for SystemSnapshot {
    fn from(system: &System) -> Self {
        Self {
            name: system.name.clone(),
            model: system.model.clone(),
            specs: system.specs.clone(),
            mac_address: system.mac_address.clone(),
            os: system.os.clone(),
        }
    }
}

/// A partial update to a [`System`]. `None` leaves the existing value in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<Vec<String>>,
}

impl SystemUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.model.is_none()
            && self.specs.is_none()
            && self.mac_address.is_none()
            && self.os.is_none()
    }

    /// Overwrite the fields this update carries
    pub fn apply_to(&self, system: &mut System) {
        if let Some(name) = &self.name {
            system.name = name.clone();
        }
        if let Some(model) = &self.model {
            system.model = model.clone();
        }
        if let Some(specs) = &self.specs {
            system.specs = specs.clone();
        }
        if let Some(mac_address) = &self.mac_address {
            system.mac_address = mac_address.clone();
        }
        if let Some(os) = &self.os {
            system.os = os.clone();
        }
    }

    /// Same as [`apply_to`](Self::apply_to), for the snapshot view
    pub fn apply_to_snapshot(&self, snapshot: &mut SystemSnapshot) {
        if let Some(name) = &self.name {
            snapshot.name = name.clone();
        }
        if let Some(model) = &self.model {
            snapshot.model = model.clone();
        }
        if let Some(specs) = &self.specs {
            snapshot.specs = specs.clone();
        }
        if let Some(mac_address) = &self.mac_address {
            snapshot.mac_address = mac_address.clone();
        }
        if let Some(os) = &self.os {
            snapshot.os = os.clone();
        }
    }
}
