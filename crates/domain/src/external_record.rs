use crate::errors::DomainError;
use serde::{Deserialize, Serialize};

/// Provisioning states under which an instance (or any of its partitions)
/// may still produce billing records. Anything else is terminal.
pub const ACTIVE_STATES: [&str; 3] = ["Succeeded", "Creating", "Updating"];

/// One data partition of an instance, as reported by the system of record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionRecord {
    pub name: String,
    #[serde(default)]
    pub managed_resource_group: String,
    pub provisioning_state: String,
}

/// Snapshot row from the system of record describing one deployed
/// instance. Read-only input to the cleanup decision; the only write-back
/// this system performs is flipping `provisioning_state` to `Deleted`
/// through the document-store collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalRecord {
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
    pub partitions: Vec<PartitionRecord>,
}

impl ExternalRecord {
    /// Analytics rows carry the partition list as a JSON-encoded string
    /// column; decode it into typed partition records.
    pub fn decode_partitions(raw: &str) -> Result<Vec<PartitionRecord>, DomainError> {
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(raw)
            .map_err(|e| DomainError::InvalidPayload(format!("partition list: {e}")))
    }
}

/// Whether an invalid instance needs investigation before deletion.
///
/// True iff any matched record, or any of its data partitions, is in an
/// active provisioning state. An empty record set never needs
/// investigation: nothing in the system of record can be billing.
pub fn requires_investigation(records: &[ExternalRecord]) -> bool {
    records.iter().any(|record| {
        ACTIVE_STATES.contains(&record.provisioning_state.as_str())
            || record
                .partitions
                .iter()
                .any(|p| ACTIVE_STATES.contains(&p.provisioning_state.as_str()))
    })
}
