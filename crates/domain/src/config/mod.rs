//! Configuration module for subsweep
//!
//! One module per configuration section:
//! - `root`: main configuration and CLI overrides
//! - `execution`: per-service schedules and run modes
//! - `dns`: DNS zones and their environment mapping
//! - `cache`: TTLs for the shared service cache
//! - `directory`: service-directory lookup settings
//! - `snapshot`: offline snapshot source
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod cache;
pub mod directory;
pub mod dns;
pub mod errors;
pub mod execution;
pub mod logging;
pub mod root;
pub mod snapshot;

pub use cache::CacheConfig;
pub use directory::DirectoryConfig;
pub use dns::{DnsZoneEnvironment, DnsZonesConfig};
pub use errors::ConfigError;
pub use execution::{DnsCleanupConfig, ExecutionConfig, ExpirationConfig, InstanceCleanupConfig};
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use snapshot::SnapshotConfig;
