use serde::{Deserialize, Serialize};
use std::time::Duration;

/// TTLs for the shared service cache. Each entry type is tunable on its
/// own; 20 minutes keeps a full multi-subscription pass on one load.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_ttl_minutes")]
    pub subscription_ttl_minutes: u64,

    #[serde(default = "default_ttl_minutes")]
    pub zone_records_ttl_minutes: u64,
}

impl CacheConfig {
    pub fn subscription_ttl(&self) -> Duration {
        Duration::from_secs(self.subscription_ttl_minutes * 60)
    }

    pub fn zone_records_ttl(&self) -> Duration {
        Duration::from_secs(self.zone_records_ttl_minutes * 60)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            subscription_ttl_minutes: default_ttl_minutes(),
            zone_records_ttl_minutes: default_ttl_minutes(),
        }
    }
}

fn default_ttl_minutes() -> u64 {
    20
}
