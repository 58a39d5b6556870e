pub mod dns_cleanup;
pub mod expiration;
pub mod instance_cleanup;
pub mod runner;

pub use dns_cleanup::DnsCleanupJob;
pub use expiration::ExpirationJob;
pub use instance_cleanup::InstanceCleanupJob;
pub use runner::JobRunner;
