use serde::{Deserialize, Serialize};

/// One DNS zone and the product environments it serves.
///
/// The full struct is the key of the zone-record cache, so it derives
/// `Eq`/`Hash`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct DnsZoneEnvironment {
    /// Product environments whose instance records live in this zone
    #[serde(default)]
    pub environments: Vec<String>,

    /// Subscription the zone lives in
    pub subscription: String,

    /// Resource group the zone lives in
    pub resource_group: String,

    /// The zone itself
    pub zone_name: String,
}

/// DNS zones configured for cleanup and instance-record clearing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DnsZonesConfig {
    /// Instance environments whose DNS state this service may touch;
    /// records from any other environment are left alone.
    #[serde(default)]
    pub acceptable_instance_environments: Vec<String>,

    #[serde(default)]
    pub environments: Vec<DnsZoneEnvironment>,
}

impl DnsZonesConfig {
    /// The zone serving a given product environment, if configured.
    pub fn zone_for_environment(&self, environment: &str) -> Option<&DnsZoneEnvironment> {
        self.environments
            .iter()
            .find(|zone| zone.environments.iter().any(|e| e == environment))
    }

    pub fn accepts_environment(&self, environment: &str) -> bool {
        self.acceptable_instance_environments
            .iter()
            .any(|e| e == environment)
    }
}
