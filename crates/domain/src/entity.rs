use serde::{Deserialize, Serialize};

/// Terminal provisioning state written back when an instance is cleaned up.
pub const PROVISIONING_DELETED: &str = "Deleted";

/// Instance row in the document store. Only `provisioning_state` is ever
/// mutated by this system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceEntity {
    pub resource_id: String,
    pub provisioning_state: String,
}

impl InstanceEntity {
    pub fn mark_deleted(&mut self) {
        self.provisioning_state = PROVISIONING_DELETED.to_string();
    }
}

/// Data-partition row in the document store, keyed by the owning
/// instance's resource id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionEntity {
    pub resource_id: String,
    pub name: String,
    pub provisioning_state: String,
}

impl PartitionEntity {
    pub fn mark_deleted(&mut self) {
        self.provisioning_state = PROVISIONING_DELETED.to_string();
    }
}
