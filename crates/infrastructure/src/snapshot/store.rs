use async_trait::async_trait;
use subsweep_application::ports::{
    DnsZoneReader, DocumentStore, HostResolver, InstanceRecordReader, ResolveError,
    ResourceGroupRepository, SubscriptionDirectory,
};
use subsweep_domain::config::DnsZoneEnvironment;
use subsweep_domain::{
    DomainError, ExternalRecord, InstanceEntity, PartitionEntity, ResourceGroup, SubscriptionSet,
    ZoneRecord,
};
use tokio::sync::RwLock;
use tracing::debug;

use super::Snapshot;

/// In-memory store over a [`Snapshot`], implementing every collaborator
/// port. All mutations stay in memory; the file is never written back.
pub struct SnapshotStore {
    state: RwLock<Snapshot>,
    deleted_groups: RwLock<Vec<String>>,
}

impl SnapshotStore {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            state: RwLock::new(snapshot),
            deleted_groups: RwLock::new(Vec::new()),
        }
    }

    pub fn from_file(path: &str) -> Result<Self, DomainError> {
        Ok(Self::new(Snapshot::from_file(path)?))
    }

    /// Groups deleted through the repository port, in deletion order.
    pub async fn deleted_groups(&self) -> Vec<String> {
        self.deleted_groups.read().await.clone()
    }

    pub async fn instance_entity(&self, resource_id: &str) -> Option<InstanceEntity> {
        self.state
            .read()
            .await
            .instances
            .iter()
            .find(|e| e.resource_id == resource_id)
            .cloned()
    }

    pub async fn partition_entities(&self, resource_id: &str) -> Vec<PartitionEntity> {
        self.state
            .read()
            .await
            .partitions
            .iter()
            .filter(|e| e.resource_id == resource_id)
            .cloned()
            .collect()
    }

    pub async fn zone_records(&self, zone_name: &str) -> Vec<ZoneRecord> {
        self.state
            .read()
            .await
            .zones
            .get(zone_name)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl SubscriptionDirectory for SnapshotStore {
    async fn list_subscriptions(
        &self,
        _service_id: &str,
    ) -> Result<SubscriptionSet, DomainError> {
        Ok(self.state.read().await.subscriptions.clone())
    }
}

#[async_trait]
impl ResourceGroupRepository for SnapshotStore {
    async fn list_groups(
        &self,
        subscription_id: &str,
    ) -> Result<Vec<ResourceGroup>, DomainError> {
        Ok(self
            .state
            .read()
            .await
            .resource_groups
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
        let mut state = self.state.write().await;
        if state.locked_groups.iter().any(|g| g == group_name) {
            return Err(DomainError::ResourceMutation(format!(
                "group {group_name} is locked"
            )));
        }
        let group = state
            .resource_groups
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
        self.state
            .write()
            .await
            .locked_groups
            .retain(|g| g != group_name);
        Ok(())
    }

    async fn delete_group(
        &self,
        subscription_id: &str,
        group_name: &str,
    ) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        let groups = state
            .resource_groups
            .get_mut(subscription_id)
            .ok_or_else(|| DomainError::NotFound(subscription_id.to_string()))?;
        let before = groups.len();
        groups.retain(|g| g.name != group_name);
        if groups.len() == before {
            return Err(DomainError::NotFound(group_name.to_string()));
        }
        drop(state);

        debug!(group = %group_name, "snapshot group deleted");
        self.deleted_groups.write().await.push(group_name.to_string());
        Ok(())
    }
}

#[async_trait]
impl InstanceRecordReader for SnapshotStore {
    async fn fetch_instance_records(&self) -> Result<Vec<ExternalRecord>, DomainError> {
        self.state
            .read()
            .await
            .instance_records
            .iter()
            .cloned()
            .map(|row| row.into_record())
            .collect()
    }
}

#[async_trait]
impl DocumentStore for SnapshotStore {
    async fn get_instance(
        &self,
        resource_id: &str,
    ) -> Result<Option<InstanceEntity>, DomainError> {
        Ok(self.instance_entity(resource_id).await)
    }

    async fn upsert_instance(&self, entity: &InstanceEntity) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        match state
            .instances
            .iter_mut()
            .find(|e| e.resource_id == entity.resource_id)
        {
            Some(existing) => *existing = entity.clone(),
            None => state.instances.push(entity.clone()),
        }
        Ok(())
    }

    async fn get_partitions(
        &self,
        resource_id: &str,
    ) -> Result<Vec<PartitionEntity>, DomainError> {
        Ok(self.partition_entities(resource_id).await)
    }

    async fn upsert_partition(&self, entity: &PartitionEntity) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        match state
            .partitions
            .iter_mut()
            .find(|e| e.resource_id == entity.resource_id && e.name == entity.name)
        {
            Some(existing) => *existing = entity.clone(),
            None => state.partitions.push(entity.clone()),
        }
        Ok(())
    }
}

#[async_trait]
impl DnsZoneReader for SnapshotStore {
    async fn list_records(
        &self,
        zone: &DnsZoneEnvironment,
    ) -> Result<Vec<ZoneRecord>, DomainError> {
        Ok(self.zone_records(&zone.zone_name).await)
    }

    async fn delete_record(
        &self,
        zone: &DnsZoneEnvironment,
        record: &ZoneRecord,
    ) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        let records = state
            .zones
            .get_mut(&zone.zone_name)
            .ok_or_else(|| DomainError::NotFound(zone.zone_name.clone()))?;
        let before = records.len();
        records.retain(|r| !(r.name == record.name && r.kind_label() == record.kind_label()));
        if records.len() == before {
            return Err(DomainError::NotFound(record.name.clone()));
        }
        Ok(())
    }
}

#[async_trait]
impl HostResolver for SnapshotStore {
    async fn resolve(&self, host: &str) -> Result<(), ResolveError> {
        if self
            .state
            .read()
            .await
            .resolvable_hosts
            .iter()
            .any(|h| h == host)
        {
            Ok(())
        } else {
            Err(ResolveError::HostNotFound)
        }
    }
}
