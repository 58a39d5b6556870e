use serde::{Deserialize, Serialize};

/// Service-directory lookup settings. Subscription discovery is keyed by
/// the owning service's directory id.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirectoryConfig {
    #[serde(default = "default_service_id")]
    pub service_id: String,

    /// Optional allow-list of subscription ids; empty means every
    /// non-production subscription of the service.
    #[serde(default)]
    pub subscription_filter: Vec<String>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            service_id: default_service_id(),
            subscription_filter: Vec::new(),
        }
    }
}

fn default_service_id() -> String {
    "default".to_string()
}
