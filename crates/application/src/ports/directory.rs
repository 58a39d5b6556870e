use async_trait::async_trait;
use subsweep_domain::{DomainError, SubscriptionSet};

/// Directory of the subscriptions enrolled under a service, split into
/// reachable and unreachable sets.
#[async_trait]
pub trait SubscriptionDirectory: Send + Sync {
    async fn list_subscriptions(&self, service_id: &str)
        -> Result<SubscriptionSet, DomainError>;
}
