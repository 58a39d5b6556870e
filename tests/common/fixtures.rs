#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;
use subsweep_application::cache::{CacheDispatcher, SubscriptionSource, ZoneRecordsSource};
use subsweep_application::use_cases::CleanupInstancesUseCase;
use subsweep_domain::config::{DnsZoneEnvironment, DnsZonesConfig};
use subsweep_domain::{ResourceGroup, Subscription, SubscriptionSet, ZoneRecord};
use subsweep_infrastructure::snapshot::SnapshotInstanceRecord;
use subsweep_infrastructure::{Snapshot, SnapshotStore};

pub const ZONE_NAME: &str = "cloud.example.com";
pub const SUBSCRIPTION_ID: &str = "sub-engg";

pub fn subscription() -> Subscription {
    Subscription {
        id: SUBSCRIPTION_ID.to_string(),
        name: "engineering".to_string(),
    }
}

pub fn zone() -> DnsZoneEnvironment {
    DnsZoneEnvironment {
        environments: vec!["NonProd".to_string()],
        subscription: "sub-dns".to_string(),
        resource_group: "dns-rg".to_string(),
        zone_name: ZONE_NAME.to_string(),
    }
}

pub fn dns_config() -> DnsZonesConfig {
    DnsZonesConfig {
        acceptable_instance_environments: vec!["NonProd".to_string()],
        environments: vec![zone()],
    }
}

pub fn instance_record(instance: &str, state: &str, partitions_json: &str) -> SnapshotInstanceRecord {
    SnapshotInstanceRecord {
        instance_name: instance.to_string(),
        environment: "NonProd".to_string(),
        resource_id: format!("/instances/{instance}"),
        provisioning_state: state.to_string(),
        dns_name: format!("{instance}.{ZONE_NAME}"),
        compute_resource_group: format!("compute-rg-{instance}-xyz"),
        compute_state: state.to_string(),
        partitions: partitions_json.to_string(),
    }
}

/// Snapshot with one reachable subscription and an empty zone; tests add
/// what they need on top.
pub fn base_snapshot(groups: Vec<ResourceGroup>) -> Snapshot {
    let mut snapshot = Snapshot::default();
    snapshot.subscriptions = SubscriptionSet {
        reachable: vec![subscription()],
        unreachable: vec![],
    };
    snapshot
        .resource_groups
        .insert(SUBSCRIPTION_ID.to_string(), groups);
    snapshot.zones.insert(ZONE_NAME.to_string(), Vec::new());
    snapshot
}

pub fn make_cache(store: Arc<SnapshotStore>) -> Arc<CacheDispatcher> {
    let cache = Arc::new(CacheDispatcher::new());
    cache.register(SubscriptionSource::new(store.clone(), Duration::from_secs(1200)));
    cache.register(ZoneRecordsSource::new(store, Duration::from_secs(1200)));
    cache
}

pub fn make_cleanup_use_case(
    store: Arc<SnapshotStore>,
    execute: bool,
) -> CleanupInstancesUseCase {
    let cache = make_cache(store.clone());
    CleanupInstancesUseCase::new(
        store.clone(),
        store.clone(),
        store,
        cache,
        dns_config(),
        execute,
    )
}

pub fn zone_a(name: &str) -> ZoneRecord {
    ZoneRecord::a(name, format!("{name}.{ZONE_NAME}"), "10.0.0.1".parse().unwrap())
}

pub fn zone_cname(name: &str, target: &str) -> ZoneRecord {
    ZoneRecord::cname(name, format!("{name}.{ZONE_NAME}"), target)
}
