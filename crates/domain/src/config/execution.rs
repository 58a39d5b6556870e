use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Schedule for the instance cleanup service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InstanceCleanupConfig {
    /// Whether the service runs at all (default: true)
    #[serde(default = "default_true")]
    pub active: bool,

    /// When false the pass runs in dry-run mode: every step except the
    /// final resource-group delete (default: false)
    #[serde(default)]
    pub execute_cleanup: bool,

    /// Re-run after `timeout_hours`, or stop after one pass (default: true)
    #[serde(default = "default_true")]
    pub run_continuous: bool,

    /// Hours between passes (default: 24)
    #[serde(default = "default_cleanup_timeout")]
    pub timeout_hours: u64,
}

impl InstanceCleanupConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_hours * 3600)
    }
}

impl Default for InstanceCleanupConfig {
    fn default() -> Self {
        Self {
            active: true,
            execute_cleanup: false,
            run_continuous: true,
            timeout_hours: default_cleanup_timeout(),
        }
    }
}

/// Schedule and filter toggles for the DNS cleanup service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsCleanupConfig {
    #[serde(default = "default_true")]
    pub active: bool,

    #[serde(default)]
    pub execute_cleanup: bool,

    #[serde(default = "default_true")]
    pub run_continuous: bool,

    #[serde(default = "default_cleanup_timeout")]
    pub timeout_hours: u64,

    /// Environment whose zone is swept (default: "NonProd")
    #[serde(default = "default_target_environment")]
    pub target_environment: String,

    /// Flag CNAME records whose targets no longer resolve (default: true)
    #[serde(default = "default_true")]
    pub resolve_cname: bool,

    /// Flag A records with a sub-path and no CNAME root (default: true)
    #[serde(default = "default_true")]
    pub unmatched_a_records: bool,

    /// Flag records named after ephemeral test instances (default: true)
    #[serde(default = "default_true")]
    pub filter_test_instances: bool,
}

impl DnsCleanupConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_hours * 3600)
    }
}

impl Default for DnsCleanupConfig {
    fn default() -> Self {
        Self {
            active: true,
            execute_cleanup: false,
            run_continuous: true,
            timeout_hours: default_cleanup_timeout(),
            target_environment: default_target_environment(),
            resolve_cname: true,
            unmatched_a_records: true,
            filter_test_instances: true,
        }
    }
}

/// Schedule for the expiration-tagging sweep.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExpirationConfig {
    #[serde(default = "default_true")]
    pub active: bool,

    #[serde(default = "default_true")]
    pub run_continuous: bool,

    /// Hours between sweeps (default: 96)
    #[serde(default = "default_expiration_timeout")]
    pub timeout_hours: u64,

    /// Expiration stamped on untagged groups: now + this many days
    /// (default: 4)
    #[serde(default = "default_days_to_expiration")]
    pub days_to_expiration: i64,
}

impl ExpirationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_hours * 3600)
    }
}

impl Default for ExpirationConfig {
    fn default() -> Self {
        Self {
            active: true,
            run_continuous: true,
            timeout_hours: default_expiration_timeout(),
            days_to_expiration: default_days_to_expiration(),
        }
    }
}

/// Timing and run-mode settings for the three background services.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExecutionConfig {
    #[serde(default)]
    pub instance_cleanup: InstanceCleanupConfig,
    #[serde(default)]
    pub dns_cleanup: DnsCleanupConfig,
    #[serde(default)]
    pub expiration: ExpirationConfig,
}

fn default_true() -> bool {
    true
}

fn default_cleanup_timeout() -> u64 {
    24
}

fn default_expiration_timeout() -> u64 {
    96
}

fn default_days_to_expiration() -> i64 {
    4
}

fn default_target_environment() -> String {
    "NonProd".to_string()
}
