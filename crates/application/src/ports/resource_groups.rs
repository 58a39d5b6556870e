use async_trait::async_trait;
use subsweep_domain::{DomainError, ResourceGroup};

/// Gateway to the cloud resource manager for one service's subscriptions.
///
/// Implementations wrap the management SDK; every method targets a single
/// subscription so a pass can walk subscriptions sequentially.
#[async_trait]
pub trait ResourceGroupRepository: Send + Sync {
    /// List every resource group in the subscription, with tags and the
    /// managing owner populated.
    async fn list_groups(&self, subscription_id: &str)
        -> Result<Vec<ResourceGroup>, DomainError>;

    /// Write one tag on a group. A management lock causes this to fail.
    async fn set_tag(
        &self,
        subscription_id: &str,
        group_name: &str,
        key: &str,
        value: &str,
    ) -> Result<(), DomainError>;

    /// Remove every management lock from a group so it can be tagged and
    /// deleted.
    async fn remove_locks(&self, subscription_id: &str, group_name: &str)
        -> Result<(), DomainError>;

    /// Delete the group and everything in it.
    async fn delete_group(&self, subscription_id: &str, group_name: &str)
        -> Result<(), DomainError>;
}
