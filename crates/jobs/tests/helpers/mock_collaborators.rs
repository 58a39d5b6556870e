#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use subsweep_application::cache::{CacheDispatcher, SubscriptionSource, ZoneRecordsSource};
use subsweep_application::ports::{
    DnsZoneReader, DocumentStore, HostResolver, InstanceRecordReader, ResolveError,
    ResourceGroupRepository, SubscriptionDirectory,
};
use subsweep_domain::config::{DnsZoneEnvironment, DnsZonesConfig};
use subsweep_domain::{
    DomainError, ExternalRecord, InstanceEntity, PartitionEntity, PartitionRecord, ResourceGroup,
    Subscription, SubscriptionSet, ZoneRecord,
};
use tokio::sync::RwLock;

// ============================================================================
// Mock ResourceGroupRepository
// ============================================================================

pub struct MockResourceGroups {
    groups: RwLock<HashMap<String, Vec<ResourceGroup>>>,
    locked: RwLock<HashSet<String>>,
    tag_rejects: RwLock<HashSet<String>>,
    deleted: RwLock<Vec<String>>,
    set_tag_calls: AtomicU64,
}

impl MockResourceGroups {
    pub fn new() -> Self {
        Self {
            groups: RwLock::new(HashMap::new()),
            locked: RwLock::new(HashSet::new()),
            tag_rejects: RwLock::new(HashSet::new()),
            deleted: RwLock::new(Vec::new()),
            set_tag_calls: AtomicU64::new(0),
        }
    }

    pub async fn with_groups(subscription_id: &str, groups: Vec<ResourceGroup>) -> Self {
        let mock = Self::new();
        mock.groups
            .write()
            .await
            .insert(subscription_id.to_string(), groups);
        mock
    }

    /// Tag writes against this group fail until its locks are removed.
    pub async fn lock_group(&self, group_name: &str) {
        self.locked.write().await.insert(group_name.to_string());
    }

    /// Tag writes against this group always fail, locked or not.
    pub async fn reject_tags_for(&self, group_name: &str) {
        self.tag_rejects.write().await.insert(group_name.to_string());
    }

    pub async fn deleted(&self) -> Vec<String> {
        self.deleted.read().await.clone()
    }

    pub async fn group(&self, subscription_id: &str, group_name: &str) -> Option<ResourceGroup> {
        self.groups
            .read()
            .await
            .get(subscription_id)
            .and_then(|groups| groups.iter().find(|g| g.name == group_name))
            .cloned()
    }

    pub fn set_tag_calls(&self) -> u64 {
        self.set_tag_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ResourceGroupRepository for MockResourceGroups {
    async fn list_groups(
        &self,
        subscription_id: &str,
    ) -> Result<Vec<ResourceGroup>, DomainError> {
        Ok(self
            .groups
            .read()
            .await
            .get(subscription_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn set_tag(
        &self,
        subscription_id: &str,
        group_name: &str,
        key: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        self.set_tag_calls.fetch_add(1, Ordering::Relaxed);

        if self.locked.read().await.contains(group_name) {
            return Err(DomainError::ResourceMutation(format!(
                "group {group_name} is locked"
            )));
        }
        if self.tag_rejects.read().await.contains(group_name) {
            return Err(DomainError::ResourceMutation("tag write rejected".to_string()));
        }

        let mut groups = self.groups.write().await;
        let group = groups
            .get_mut(subscription_id)
            .and_then(|groups| groups.iter_mut().find(|g| g.name == group_name))
            .ok_or_else(|| DomainError::NotFound(group_name.to_string()))?;
        group.tags.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_locks(
        &self,
        _subscription_id: &str,
        group_name: &str,
    ) -> Result<(), DomainError> {
        self.locked.write().await.remove(group_name);
        Ok(())
    }

    async fn delete_group(
        &self,
        subscription_id: &str,
        group_name: &str,
    ) -> Result<(), DomainError> {
        let mut groups = self.groups.write().await;
        if let Some(list) = groups.get_mut(subscription_id) {
            list.retain(|g| g.name != group_name);
        }
        drop(groups);
        self.deleted.write().await.push(group_name.to_string());
        Ok(())
    }
}

// ============================================================================
// Mock DocumentStore
// ============================================================================

pub struct MockDocuments {
    instances: RwLock<HashMap<String, InstanceEntity>>,
    partitions: RwLock<Vec<PartitionEntity>>,
    upsert_failures_remaining: AtomicU64,
    upsert_calls: AtomicU64,
}

impl MockDocuments {
    pub fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            partitions: RwLock::new(Vec::new()),
            upsert_failures_remaining: AtomicU64::new(0),
            upsert_calls: AtomicU64::new(0),
        }
    }

    pub async fn with_instance(resource_id: &str, state: &str) -> Self {
        let mock = Self::new();
        mock.instances.write().await.insert(
            resource_id.to_string(),
            InstanceEntity {
                resource_id: resource_id.to_string(),
                provisioning_state: state.to_string(),
            },
        );
        mock
    }

    pub async fn add_partition(&self, resource_id: &str, name: &str, state: &str) {
        self.partitions.write().await.push(PartitionEntity {
            resource_id: resource_id.to_string(),
            name: name.to_string(),
            provisioning_state: state.to_string(),
        });
    }

    /// Make the next `n` upserts fail before the store recovers.
    pub fn fail_next_upserts(&self, n: u64) {
        self.upsert_failures_remaining.store(n, Ordering::SeqCst);
    }

    pub fn upsert_calls(&self) -> u64 {
        self.upsert_calls.load(Ordering::Relaxed)
    }

    pub async fn instance_state(&self, resource_id: &str) -> Option<String> {
        self.instances
            .read()
            .await
            .get(resource_id)
            .map(|e| e.provisioning_state.clone())
    }

    pub async fn partition_states(&self, resource_id: &str) -> Vec<String> {
        self.partitions
            .read()
            .await
            .iter()
            .filter(|p| p.resource_id == resource_id)
            .map(|p| p.provisioning_state.clone())
            .collect()
    }

    fn try_consume_failure(&self) -> bool {
        self.upsert_failures_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl DocumentStore for MockDocuments {
    async fn get_instance(
        &self,
        resource_id: &str,
    ) -> Result<Option<InstanceEntity>, DomainError> {
        Ok(self.instances.read().await.get(resource_id).cloned())
    }

    async fn upsert_instance(&self, entity: &InstanceEntity) -> Result<(), DomainError> {
        self.upsert_calls.fetch_add(1, Ordering::Relaxed);
        if self.try_consume_failure() {
            return Err(DomainError::DocumentStore("write throttled".to_string()));
        }
        self.instances
            .write()
            .await
            .insert(entity.resource_id.clone(), entity.clone());
        Ok(())
    }

    async fn get_partitions(
        &self,
        resource_id: &str,
    ) -> Result<Vec<PartitionEntity>, DomainError> {
        Ok(self
            .partitions
            .read()
            .await
            .iter()
            .filter(|p| p.resource_id == resource_id)
            .cloned()
            .collect())
    }

    async fn upsert_partition(&self, entity: &PartitionEntity) -> Result<(), DomainError> {
        self.upsert_calls.fetch_add(1, Ordering::Relaxed);
        if self.try_consume_failure() {
            return Err(DomainError::DocumentStore("write throttled".to_string()));
        }
        let mut partitions = self.partitions.write().await;
        match partitions
            .iter_mut()
            .find(|p| p.resource_id == entity.resource_id && p.name == entity.name)
        {
            Some(existing) => *existing = entity.clone(),
            None => partitions.push(entity.clone()),
        }
        Ok(())
    }
}

// ============================================================================
// Mock DnsZoneReader
// ============================================================================

pub struct MockDnsZones {
    records: RwLock<Vec<ZoneRecord>>,
    delete_rejects: RwLock<HashSet<String>>,
    deleted: RwLock<Vec<(String, String)>>,
    list_calls: AtomicU64,
}

impl MockDnsZones {
    pub fn new(records: Vec<ZoneRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            delete_rejects: RwLock::new(HashSet::new()),
            deleted: RwLock::new(Vec::new()),
            list_calls: AtomicU64::new(0),
        }
    }

    pub async fn reject_deletes_for(&self, record_name: &str) {
        self.delete_rejects.write().await.insert(record_name.to_string());
    }

    /// `(kind, name)` pairs deleted so far.
    pub async fn deleted(&self) -> Vec<(String, String)> {
        self.deleted.read().await.clone()
    }

    pub fn list_calls(&self) -> u64 {
        self.list_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl DnsZoneReader for MockDnsZones {
    async fn list_records(
        &self,
        _zone: &DnsZoneEnvironment,
    ) -> Result<Vec<ZoneRecord>, DomainError> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);
        Ok(self.records.read().await.clone())
    }

    async fn delete_record(
        &self,
        _zone: &DnsZoneEnvironment,
        record: &ZoneRecord,
    ) -> Result<(), DomainError> {
        if self.delete_rejects.read().await.contains(&record.name) {
            return Err(DomainError::DnsZone("delete rejected".to_string()));
        }
        self.records
            .write()
            .await
            .retain(|r| !(r.name == record.name && r.kind_label() == record.kind_label()));
        self.deleted
            .write()
            .await
            .push((record.kind_label().to_string(), record.name.clone()));
        Ok(())
    }
}

// ============================================================================
// Mock HostResolver
// ============================================================================

pub struct MockResolver {
    resolvable: HashSet<String>,
    inconclusive: HashSet<String>,
}

impl MockResolver {
    pub fn new(resolvable: &[&str]) -> Self {
        Self {
            resolvable: resolvable.iter().map(|s| s.to_string()).collect(),
            inconclusive: HashSet::new(),
        }
    }

    /// Lookups for this host fail with a non-definitive error.
    pub fn with_inconclusive(mut self, host: &str) -> Self {
        self.inconclusive.insert(host.to_string());
        self
    }
}

#[async_trait]
impl HostResolver for MockResolver {
    async fn resolve(&self, host: &str) -> Result<(), ResolveError> {
        if self.inconclusive.contains(host) {
            return Err(ResolveError::Other("timed out".to_string()));
        }
        if self.resolvable.contains(host) {
            Ok(())
        } else {
            Err(ResolveError::HostNotFound)
        }
    }
}

// ============================================================================
// Mock SubscriptionDirectory / InstanceRecordReader
// ============================================================================

pub struct MockDirectory {
    set: SubscriptionSet,
    list_calls: AtomicU64,
}

impl MockDirectory {
    pub fn new(set: SubscriptionSet) -> Self {
        Self { set, list_calls: AtomicU64::new(0) }
    }

    pub fn list_calls(&self) -> u64 {
        self.list_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl SubscriptionDirectory for MockDirectory {
    async fn list_subscriptions(
        &self,
        _service_id: &str,
    ) -> Result<SubscriptionSet, DomainError> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);
        Ok(self.set.clone())
    }
}

pub struct MockRecordReader {
    records: Vec<ExternalRecord>,
}

impl MockRecordReader {
    pub fn new(records: Vec<ExternalRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl InstanceRecordReader for MockRecordReader {
    async fn fetch_instance_records(&self) -> Result<Vec<ExternalRecord>, DomainError> {
        Ok(self.records.clone())
    }
}

// ============================================================================
// Builders
// ============================================================================

pub fn make_subscription(id: &str, name: &str) -> Subscription {
    Subscription { id: id.to_string(), name: name.to_string() }
}

pub fn make_zone() -> DnsZoneEnvironment {
    DnsZoneEnvironment {
        environments: vec!["NonProd".to_string()],
        subscription: "sub-dns".to_string(),
        resource_group: "dns-rg".to_string(),
        zone_name: "cloud.example.com".to_string(),
    }
}

pub fn make_dns_config() -> DnsZonesConfig {
    DnsZonesConfig {
        acceptable_instance_environments: vec!["NonProd".to_string()],
        environments: vec![make_zone()],
    }
}

pub fn make_record(instance: &str, state: &str, partition_states: &[&str]) -> ExternalRecord {
    ExternalRecord {
        instance_name: instance.to_string(),
        environment: "NonProd".to_string(),
        resource_id: format!("/instances/{instance}"),
        provisioning_state: state.to_string(),
        dns_name: format!("{instance}.cloud.example.com"),
        compute_resource_group: format!("compute-rg-{instance}-eastus"),
        compute_state: state.to_string(),
        partitions: partition_states
            .iter()
            .enumerate()
            .map(|(i, s)| PartitionRecord {
                name: format!("dp{i}"),
                managed_resource_group: format!("datapartition-rg-{instance}-dp{i}"),
                provisioning_state: s.to_string(),
            })
            .collect(),
    }
}

/// Cache dispatcher wired with both sources and short TTLs.
pub fn make_cache(zones: Arc<MockDnsZones>, directory: Arc<MockDirectory>) -> Arc<CacheDispatcher> {
    let cache = Arc::new(CacheDispatcher::new());
    cache.register(ZoneRecordsSource::new(zones, Duration::from_secs(1200)));
    cache.register(SubscriptionSource::new(directory, Duration::from_secs(1200)));
    cache
}
