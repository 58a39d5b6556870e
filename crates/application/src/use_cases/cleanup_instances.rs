use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use subsweep_domain::config::DnsZonesConfig;
use subsweep_domain::resource_group::DELETION_ATTEMPT_TAG;
use subsweep_domain::{
    DomainError, ExternalRecord, InstanceEntity, PartitionEntity, ResourceGroup, Subscription,
};
use tracing::{error, info, instrument, warn};

use crate::cache::{CacheDispatcher, ZoneRecordsSource};
use crate::ports::{DnsZoneReader, DocumentStore, ResourceGroupRepository};
use crate::services::{assemble_collections, classify_groups, find_abandoned, plan_cleanup};

/// Upserts get one more chance after this pause before the field is
/// skipped for the pass.
const UPSERT_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Summary of one subscription's cleanup pass.
#[derive(Debug, Clone, Default)]
pub struct CleanupOutcome {
    pub classified: usize,
    pub collections: usize,
    pub invalid_instances: Vec<String>,
    pub abandoned_resources: Vec<String>,
    pub investigated_instances: Vec<String>,
    pub groups_to_delete: usize,
    pub groups_deleted: usize,
    pub executed: bool,
}

/// Use case: sweep one subscription's resource groups, decide what goes,
/// reconcile the system of record for anything that might still be
/// billing, and (in execute mode) delete the losers.
pub struct CleanupInstancesUseCase {
    groups: Arc<dyn ResourceGroupRepository>,
    documents: Arc<dyn DocumentStore>,
    dns_zones: Arc<dyn DnsZoneReader>,
    cache: Arc<CacheDispatcher>,
    dns_config: DnsZonesConfig,
    execute_cleanup: bool,
}

impl CleanupInstancesUseCase {
    pub fn new(
        groups: Arc<dyn ResourceGroupRepository>,
        documents: Arc<dyn DocumentStore>,
        dns_zones: Arc<dyn DnsZoneReader>,
        cache: Arc<CacheDispatcher>,
        dns_config: DnsZonesConfig,
        execute_cleanup: bool,
    ) -> Self {
        Self {
            groups,
            documents,
            dns_zones,
            cache,
            dns_config,
            execute_cleanup,
        }
    }

    #[instrument(skip(self, snapshot), fields(subscription = %subscription.name))]
    pub async fn execute(
        &self,
        subscription: &Subscription,
        snapshot: &[ExternalRecord],
    ) -> Result<CleanupOutcome, DomainError> {
        let groups = self.groups.list_groups(&subscription.id).await?;
        let resources = classify_groups(&groups);
        let collections = assemble_collections(&resources);
        let abandoned = find_abandoned(&resources, &collections);

        let invalid: Vec<_> = collections.iter().filter(|c| !c.is_valid()).cloned().collect();

        let mut outcome = CleanupOutcome {
            classified: resources.len(),
            collections: collections.len(),
            invalid_instances: invalid.iter().map(|c| c.instance_name.clone()).collect(),
            abandoned_resources: abandoned.iter().map(|r| r.group.name.clone()).collect(),
            executed: self.execute_cleanup,
            ..Default::default()
        };

        info!(
            classified = outcome.classified,
            collections = outcome.collections,
            invalid = outcome.invalid_instances.len(),
            abandoned = outcome.abandoned_resources.len(),
            "subscription parsed"
        );

        let plan = plan_cleanup(invalid, &abandoned, snapshot);

        // Investigated collections were still active in the system of
        // record: clear the database and DNS state first, then their
        // groups join the delete set as cleaned-up leftovers.
        let mut cleaned_up: Vec<ResourceGroup> = Vec::new();
        for (collection, records) in &plan.investigations {
            outcome.investigated_instances.push(collection.instance_name.clone());
            cleaned_up.push(collection.parent.group.clone());
            cleaned_up.extend(collection.partitions.iter().map(|p| p.group.clone()));

            // With more than one matched record, only the first drives the
            // clearing; later matches are assumed stale duplicates.
            if let Some(record) = records.first() {
                if let Err(e) = self.clear_document_state(record).await {
                    error!(instance = %record.instance_name, error = %e, "clearing document state failed");
                }
                if let Err(e) = self.clear_dns_records(record).await {
                    error!(instance = %record.instance_name, error = %e, "clearing DNS records failed");
                }
            }
        }

        let mut delete_groups: Vec<ResourceGroup> =
            plan.delete_list.iter().map(|r| r.group.clone()).collect();
        delete_groups.extend(cleaned_up);
        outcome.groups_to_delete = delete_groups.len();

        if self.execute_cleanup {
            warn!(count = delete_groups.len(), "execute mode on, deleting resource groups");
            outcome.groups_deleted = self.delete_groups(&subscription.id, &delete_groups).await;
        } else {
            info!(count = delete_groups.len(), "dry run, leaving resource groups in place");
        }

        Ok(outcome)
    }

    /// Flip the matched instance record and each of its partitions to
    /// `Deleted`. Each upsert is retried once after a short delay; a
    /// second failure skips that field and the pass carries on.
    async fn clear_document_state(&self, record: &ExternalRecord) -> Result<(), DomainError> {
        if let Some(mut entity) = self.documents.get_instance(&record.resource_id).await? {
            entity.mark_deleted();
            self.upsert_instance_with_retry(&entity).await;
        }

        let mut partitions = self.documents.get_partitions(&record.resource_id).await?;
        for partition in partitions.iter_mut() {
            partition.mark_deleted();
            self.upsert_partition_with_retry(partition).await;
        }

        Ok(())
    }

    async fn upsert_instance_with_retry(&self, entity: &InstanceEntity) {
        if self.documents.upsert_instance(entity).await.is_ok() {
            return;
        }
        tokio::time::sleep(UPSERT_RETRY_DELAY).await;
        if let Err(e) = self.documents.upsert_instance(entity).await {
            warn!(resource_id = %entity.resource_id, error = %e, "instance upsert failed twice, skipping");
        }
    }

    async fn upsert_partition_with_retry(&self, entity: &PartitionEntity) {
        if self.documents.upsert_partition(entity).await.is_ok() {
            return;
        }
        tokio::time::sleep(UPSERT_RETRY_DELAY).await;
        if let Err(e) = self.documents.upsert_partition(entity).await {
            warn!(
                resource_id = %entity.resource_id,
                partition = %entity.name,
                error = %e,
                "partition upsert failed twice, skipping"
            );
        }
    }

    /// Delete every A/CNAME record whose fully-qualified name equals the
    /// instance's DNS name, in the zone serving its environment.
    async fn clear_dns_records(&self, record: &ExternalRecord) -> Result<(), DomainError> {
        if !self.dns_config.accepts_environment(&record.environment) {
            return Ok(());
        }
        let Some(zone) = self.dns_config.zone_for_environment(&record.environment) else {
            warn!(environment = %record.environment, "no DNS zone configured for environment");
            return Ok(());
        };

        let zone_records = self.cache.get::<ZoneRecordsSource>(zone.clone()).await?;
        for zone_record in zone_records.iter().filter(|r| r.fqdn == record.dns_name) {
            info!(
                record = %zone_record.name,
                kind = zone_record.kind_label(),
                "removing instance DNS record"
            );
            if let Err(e) = self.dns_zones.delete_record(zone, zone_record).await {
                warn!(record = %zone_record.name, error = %e, "DNS record delete failed");
            }
        }
        Ok(())
    }

    /// Locks come off first so the deletion-attempt stamp can land; groups
    /// that linger past the delete call stay visible through the stamp.
    async fn delete_groups(&self, subscription_id: &str, groups: &[ResourceGroup]) -> usize {
        let mut deleted = 0;
        for group in groups {
            if let Err(e) = self.groups.remove_locks(subscription_id, &group.name).await {
                warn!(group = %group.name, error = %e, "failed to remove locks");
            }
            let stamp = Utc::now().to_rfc3339();
            if let Err(e) = self
                .groups
                .set_tag(subscription_id, &group.name, DELETION_ATTEMPT_TAG, &stamp)
                .await
            {
                warn!(group = %group.name, error = %e, "failed to stamp deletion attempt");
            }
            match self.groups.delete_group(subscription_id, &group.name).await {
                Ok(()) => deleted += 1,
                Err(e) => error!(group = %group.name, error = %e, "resource group delete failed"),
            }
        }
        deleted
    }
}
