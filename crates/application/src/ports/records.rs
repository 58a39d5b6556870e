use async_trait::async_trait;
use subsweep_domain::{DomainError, ExternalRecord};

/// Reader over the analytics system of record. One fetch materializes the
/// full instance snapshot used to cross-check invalid collections.
#[async_trait]
pub trait InstanceRecordReader: Send + Sync {
    async fn fetch_instance_records(&self) -> Result<Vec<ExternalRecord>, DomainError>;
}
