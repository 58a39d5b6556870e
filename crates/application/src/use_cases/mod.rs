pub mod cleanup_instances;
pub mod prune_dns;
pub mod tag_expirations;

pub use cleanup_instances::{CleanupInstancesUseCase, CleanupOutcome};
pub use prune_dns::{DnsPruneOptions, DnsPruneOutcome, PruneDnsRecordsUseCase};
pub use tag_expirations::TagExpirationsUseCase;
