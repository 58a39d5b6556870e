use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Payload of a zone record. Only the two kinds this service reconciles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum ZoneRecordData {
    A { address: IpAddr },
    Cname { target: String },
}

/// A single A or CNAME record from a DNS zone. `name` is the record name
/// relative to the zone; `fqdn` is the fully-qualified form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneRecord {
    pub name: String,
    pub fqdn: String,
    pub data: ZoneRecordData,
}

impl ZoneRecord {
    pub fn a(name: impl Into<String>, fqdn: impl Into<String>, address: IpAddr) -> Self {
        Self {
            name: name.into(),
            fqdn: fqdn.into(),
            data: ZoneRecordData::A { address },
        }
    }

    pub fn cname(
        name: impl Into<String>,
        fqdn: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            fqdn: fqdn.into(),
            data: ZoneRecordData::Cname { target: target.into() },
        }
    }

    pub fn is_a(&self) -> bool {
        matches!(self.data, ZoneRecordData::A { .. })
    }

    pub fn is_cname(&self) -> bool {
        matches!(self.data, ZoneRecordData::Cname { .. })
    }

    pub fn kind_label(&self) -> &'static str {
        match self.data {
            ZoneRecordData::A { .. } => "A",
            ZoneRecordData::Cname { .. } => "CNAME",
        }
    }

    /// Whether the record name carries a qualifying sub-path
    /// (e.g. `alpha.internal` as opposed to plain `alpha`).
    pub fn has_subpath(&self) -> bool {
        self.name.contains('.')
    }

    /// Base name used to pair A records with their CNAME root: everything
    /// up to the first `.`, with a trailing `bkp` marker stripped.
    pub fn base_name(&self) -> &str {
        let head = self.name.split('.').next().unwrap_or(&self.name);
        head.strip_suffix("bkp").unwrap_or(head)
    }
}
