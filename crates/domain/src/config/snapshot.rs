use serde::{Deserialize, Serialize};

/// Source for the offline snapshot adapters.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SnapshotConfig {
    /// JSON snapshot file backing the collaborator ports
    /// (default: "snapshot.json")
    #[serde(default = "default_snapshot_path")]
    pub path: String,

    /// Resolve CNAME targets against the live system resolver instead of
    /// the snapshot's host list (default: false)
    #[serde(default)]
    pub system_resolver: bool,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: default_snapshot_path(),
            system_resolver: false,
        }
    }
}

fn default_snapshot_path() -> String {
    "snapshot.json".to_string()
}
