//! Subsweep Domain Layer
pub mod config;
pub mod entity;
pub mod errors;
pub mod expiration;
pub mod external_record;
pub mod resource;
pub mod resource_group;
pub mod subscription;
pub mod zone_record;

pub use config::{CliOverrides, Config, ConfigError};
pub use entity::{InstanceEntity, PartitionEntity, PROVISIONING_DELETED};
pub use errors::DomainError;
pub use expiration::ExpirationSweepResult;
pub use external_record::{requires_investigation, ExternalRecord, PartitionRecord, ACTIVE_STATES};
pub use resource::{ClassifiedResource, CleanupPlan, InstanceCollection, ResourceKind};
pub use resource_group::ResourceGroup;
pub use subscription::{Subscription, SubscriptionSet};
pub use zone_record::{ZoneRecord, ZoneRecordData};
