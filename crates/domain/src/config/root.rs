use serde::{Deserialize, Serialize};
use std::path::Path;

use super::cache::CacheConfig;
use super::directory::DirectoryConfig;
use super::dns::DnsZonesConfig;
use super::errors::ConfigError;
use super::execution::ExecutionConfig;
use super::logging::LoggingConfig;
use super::snapshot::SnapshotConfig;

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Force every service into single-pass mode
    pub run_once: bool,
    /// Override `execute_cleanup` for the cleanup services
    pub execute: Option<bool>,
    /// Override the snapshot file path
    pub snapshot_path: Option<String>,
}

/// Main configuration, assembled from the TOML config file plus CLI
/// overrides.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub execution: ExecutionConfig,
    #[serde(default)]
    pub dns: DnsZonesConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub snapshot: SnapshotConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from `path` (defaults apply when `path` is
    /// `None`), then layer the CLI overrides on top.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Config, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Config::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Config, ConfigError> {
        let raw = std::fs::read_to_string(Path::new(path)).map_err(|e| ConfigError::Read {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_overrides(&mut self, overrides: CliOverrides) {
        if overrides.run_once {
            self.execution.instance_cleanup.run_continuous = false;
            self.execution.dns_cleanup.run_continuous = false;
            self.execution.expiration.run_continuous = false;
        }
        if let Some(execute) = overrides.execute {
            self.execution.instance_cleanup.execute_cleanup = execute;
            self.execution.dns_cleanup.execute_cleanup = execute;
        }
        if let Some(path) = overrides.snapshot_path {
            self.snapshot.path = path;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.execution.instance_cleanup.timeout_hours == 0
            || self.execution.dns_cleanup.timeout_hours == 0
            || self.execution.expiration.timeout_hours == 0
        {
            return Err(ConfigError::Invalid(
                "service timeout_hours must be greater than zero".to_string(),
            ));
        }
        if self.execution.expiration.days_to_expiration <= 0 {
            return Err(ConfigError::Invalid(
                "days_to_expiration must be positive".to_string(),
            ));
        }
        if self.cache.subscription_ttl_minutes == 0 || self.cache.zone_records_ttl_minutes == 0 {
            return Err(ConfigError::Invalid(
                "cache TTLs must be greater than zero".to_string(),
            ));
        }
        for zone in &self.dns.environments {
            if zone.zone_name.is_empty() {
                return Err(ConfigError::Invalid(
                    "DNS environment with empty zone_name".to_string(),
                ));
            }
        }
        Ok(())
    }
}
