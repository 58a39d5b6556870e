//! Full cleanup passes over the snapshot adapters.

use std::sync::Arc;
use subsweep_application::ports::{InstanceRecordReader, ResourceGroupRepository};
use subsweep_domain::{InstanceEntity, PartitionEntity, ResourceGroup};
use subsweep_infrastructure::SnapshotStore;

#[path = "../common/fixtures.rs"]
mod fixtures;
use fixtures::{
    base_snapshot, instance_record, make_cleanup_use_case, subscription, zone_a, zone_cname,
    SUBSCRIPTION_ID, ZONE_NAME,
};

#[tokio::test]
async fn test_headless_instance_with_no_record_goes_straight_to_delete() {
    // One instance group, no cluster, no partition, nothing in the system
    // of record
    let snapshot = base_snapshot(vec![ResourceGroup::new("compute-rg-alpha-xyz")]);
    let store = Arc::new(SnapshotStore::new(snapshot));
    let use_case = make_cleanup_use_case(store.clone(), true);

    let records = store.fetch_instance_records().await.unwrap();
    let outcome = use_case.execute(&subscription(), &records).await.unwrap();

    assert_eq!(outcome.invalid_instances, vec!["alpha"]);
    assert!(outcome.investigated_instances.is_empty());
    assert_eq!(store.deleted_groups().await, vec!["compute-rg-alpha-xyz"]);
}

#[tokio::test]
async fn test_active_record_is_cleared_then_groups_deleted() {
    // Same invalid instance, but the system of record still carries it as
    // Succeeded, with document-store rows and DNS records behind it
    let mut snapshot = base_snapshot(vec![ResourceGroup::new("compute-rg-alpha-xyz")]);
    snapshot.instance_records.push(instance_record(
        "alpha",
        "Succeeded",
        r#"[{"name":"dp1","provisioning_state":"Succeeded"}]"#,
    ));
    snapshot.instances.push(InstanceEntity {
        resource_id: "/instances/alpha".to_string(),
        provisioning_state: "Succeeded".to_string(),
    });
    snapshot.partitions.push(PartitionEntity {
        resource_id: "/instances/alpha".to_string(),
        name: "dp1".to_string(),
        provisioning_state: "Succeeded".to_string(),
    });
    snapshot.zones.insert(
        ZONE_NAME.to_string(),
        vec![
            zone_cname("alpha", "alpha-lb.example.net"),
            zone_a("alpha"),
            zone_cname("beta", "beta-lb.example.net"),
        ],
    );

    let store = Arc::new(SnapshotStore::new(snapshot));
    let use_case = make_cleanup_use_case(store.clone(), true);

    let records = store.fetch_instance_records().await.unwrap();
    let outcome = use_case.execute(&subscription(), &records).await.unwrap();

    // routed through investigation, not straight deletion
    assert_eq!(outcome.investigated_instances, vec!["alpha"]);

    // the system of record was marked Deleted
    let entity = store.instance_entity("/instances/alpha").await.unwrap();
    assert_eq!(entity.provisioning_state, "Deleted");
    let partitions = store.partition_entities("/instances/alpha").await;
    assert!(partitions.iter().all(|p| p.provisioning_state == "Deleted"));

    // only alpha's DNS records were removed
    let remaining = store.zone_records(ZONE_NAME).await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "beta");

    // and the group itself went away as a cleaned-up leftover
    assert_eq!(store.deleted_groups().await, vec!["compute-rg-alpha-xyz"]);
}

#[tokio::test]
async fn test_mixed_subscription_only_loses_the_invalid_instance() {
    let snapshot = base_snapshot(vec![
        // valid: full set
        ResourceGroup::new("compute-rg-beta-xyz"),
        ResourceGroup::new("mc_compute-rg-beta-xyz"),
        ResourceGroup::new("datapartition-rg-beta-dp1"),
        // invalid: headless
        ResourceGroup::new("compute-rg-alpha-xyz"),
        // unclassified noise
        ResourceGroup::new("networkwatcher-rg"),
    ]);
    let store = Arc::new(SnapshotStore::new(snapshot));
    let use_case = make_cleanup_use_case(store.clone(), true);

    let outcome = use_case.execute(&subscription(), &[]).await.unwrap();

    assert_eq!(outcome.classified, 4);
    assert_eq!(outcome.collections, 2);
    assert_eq!(outcome.invalid_instances, vec!["alpha"]);
    assert_eq!(store.deleted_groups().await, vec!["compute-rg-alpha-xyz"]);

    let remaining = store.list_groups(SUBSCRIPTION_ID).await.unwrap();
    assert_eq!(remaining.len(), 4);
}

#[tokio::test]
async fn test_dry_run_leaves_every_group_in_place() {
    let mut snapshot = base_snapshot(vec![ResourceGroup::new("compute-rg-alpha-xyz")]);
    snapshot
        .instance_records
        .push(instance_record("alpha", "Succeeded", "[]"));
    snapshot.instances.push(InstanceEntity {
        resource_id: "/instances/alpha".to_string(),
        provisioning_state: "Succeeded".to_string(),
    });

    let store = Arc::new(SnapshotStore::new(snapshot));
    let use_case = make_cleanup_use_case(store.clone(), false);

    let records = store.fetch_instance_records().await.unwrap();
    let outcome = use_case.execute(&subscription(), &records).await.unwrap();

    // document state still cleared, but no group was deleted
    assert!(!outcome.executed);
    assert_eq!(outcome.groups_to_delete, 1);
    assert_eq!(outcome.groups_deleted, 0);
    assert!(store.deleted_groups().await.is_empty());
    let entity = store.instance_entity("/instances/alpha").await.unwrap();
    assert_eq!(entity.provisioning_state, "Deleted");
}
