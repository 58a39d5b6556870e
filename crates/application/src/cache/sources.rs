use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use subsweep_domain::config::DnsZoneEnvironment;
use subsweep_domain::{DomainError, SubscriptionSet, ZoneRecord};
use tracing::info;

use super::dispatcher::CacheSource;
use crate::ports::{DnsZoneReader, SubscriptionDirectory};

/// Subscription discovery, keyed by service-directory id. Discovery walks
/// an external directory and probes reachability, so one load should cover
/// a whole multi-service pass.
pub struct SubscriptionSource {
    directory: Arc<dyn SubscriptionDirectory>,
    ttl: Duration,
}

impl SubscriptionSource {
    pub fn new(directory: Arc<dyn SubscriptionDirectory>, ttl: Duration) -> Self {
        Self { directory, ttl }
    }
}

#[async_trait]
impl CacheSource for SubscriptionSource {
    type Key = String;
    type Value = SubscriptionSet;

    async fn load(&self, service_id: &String) -> Result<SubscriptionSet, DomainError> {
        info!(service_id = %service_id, "loading subscriptions from directory");
        self.directory.list_subscriptions(service_id).await
    }

    fn ttl(&self) -> Duration {
        self.ttl
    }
}

/// Full A + CNAME record listing for a zone. Enumerating a zone is the
/// slowest call the DNS passes make; both the dangling-record sweep and
/// the instance DNS clearing read through this source.
pub struct ZoneRecordsSource {
    zones: Arc<dyn DnsZoneReader>,
    ttl: Duration,
}

impl ZoneRecordsSource {
    pub fn new(zones: Arc<dyn DnsZoneReader>, ttl: Duration) -> Self {
        Self { zones, ttl }
    }
}

#[async_trait]
impl CacheSource for ZoneRecordsSource {
    type Key = DnsZoneEnvironment;
    type Value = Arc<Vec<ZoneRecord>>;

    async fn load(&self, zone: &DnsZoneEnvironment) -> Result<Arc<Vec<ZoneRecord>>, DomainError> {
        info!(zone = %zone.zone_name, "loading zone records");
        Ok(Arc::new(self.zones.list_records(zone).await?))
    }

    fn ttl(&self) -> Duration {
        self.ttl
    }
}
