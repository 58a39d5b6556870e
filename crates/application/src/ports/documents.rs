use async_trait::async_trait;
use subsweep_domain::{DomainError, InstanceEntity, PartitionEntity};

/// Document-database access for instance and partition entities. The only
/// field this system ever mutates is `provisioning_state`; upserts must be
/// idempotent.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get_instance(&self, resource_id: &str)
        -> Result<Option<InstanceEntity>, DomainError>;

    async fn upsert_instance(&self, entity: &InstanceEntity) -> Result<(), DomainError>;

    async fn get_partitions(&self, resource_id: &str)
        -> Result<Vec<PartitionEntity>, DomainError>;

    async fn upsert_partition(&self, entity: &PartitionEntity) -> Result<(), DomainError>;
}
