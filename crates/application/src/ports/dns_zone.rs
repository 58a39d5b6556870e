use async_trait::async_trait;
use subsweep_domain::config::DnsZoneEnvironment;
use subsweep_domain::{DomainError, ZoneRecord};

/// Access to one DNS zone's A and CNAME record sets.
#[async_trait]
pub trait DnsZoneReader: Send + Sync {
    async fn list_records(
        &self,
        zone: &DnsZoneEnvironment,
    ) -> Result<Vec<ZoneRecord>, DomainError>;

    async fn delete_record(
        &self,
        zone: &DnsZoneEnvironment,
        record: &ZoneRecord,
    ) -> Result<(), DomainError>;
}
