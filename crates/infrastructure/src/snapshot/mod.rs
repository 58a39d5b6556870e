//! JSON snapshot of every collaborator's state.
//!
//! A snapshot file captures subscriptions, resource groups, system-of-
//! record rows, document-store entities, and zone records in one place,
//! so full cleanup passes can run offline. Mutations (tags, deletions,
//! upserts) are applied in memory and are observable afterwards.

pub mod store;

pub use store::SnapshotStore;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use subsweep_domain::{
    DomainError, ExternalRecord, InstanceEntity, PartitionEntity, ResourceGroup, SubscriptionSet,
    ZoneRecord,
};

/// One system-of-record row as it appears in a snapshot file. The
/// partition list is kept in its wire form, a JSON-encoded string column,
/// and decoded on read — the same shape the analytics client materializes.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SnapshotInstanceRecord {
    pub instance_name: String,
    pub environment: String,
    pub resource_id: String,
    pub provisioning_state: String,
    pub dns_name: String,
    #[serde(default)]
    pub compute_resource_group: String,
    #[serde(default)]
    pub compute_state: String,
    #[serde(default)]
    pub partitions: String,
}

impl SnapshotInstanceRecord {
    pub fn into_record(self) -> Result<ExternalRecord, DomainError> {
        let partitions = ExternalRecord::decode_partitions(&self.partitions)?;
        Ok(ExternalRecord {
            instance_name: self.instance_name,
            environment: self.environment,
            resource_id: self.resource_id,
            provisioning_state: self.provisioning_state,
            dns_name: self.dns_name,
            compute_resource_group: self.compute_resource_group,
            compute_state: self.compute_state,
            partitions,
        })
    }
}

/// The full snapshot file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Snapshot {
    #[serde(default)]
    pub subscriptions: SubscriptionSet,

    /// Resource groups per subscription id
    #[serde(default)]
    pub resource_groups: HashMap<String, Vec<ResourceGroup>>,

    /// Names of groups carrying a management lock; tag writes against
    /// them fail until the locks are removed
    #[serde(default)]
    pub locked_groups: Vec<String>,

    #[serde(default)]
    pub instance_records: Vec<SnapshotInstanceRecord>,

    #[serde(default)]
    pub instances: Vec<InstanceEntity>,

    #[serde(default)]
    pub partitions: Vec<PartitionEntity>,

    /// Zone records per zone name
    #[serde(default)]
    pub zones: HashMap<String, Vec<ZoneRecord>>,

    /// Hosts the snapshot resolver answers for; everything else is
    /// host-not-found
    #[serde(default)]
    pub resolvable_hosts: Vec<String>,
}

impl Snapshot {
    pub fn from_file(path: &str) -> Result<Snapshot, DomainError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| DomainError::IoError(format!("snapshot {path}: {e}")))?;
        serde_json::from_str(&raw)
            .map_err(|e| DomainError::InvalidPayload(format!("snapshot {path}: {e}")))
    }
}
