use subsweep_domain::{
    requires_investigation, ClassifiedResource, CleanupPlan, ExternalRecord, InstanceCollection,
    ResourceKind,
};
use tracing::{info, warn};

/// Decide the fate of every invalid collection and abandoned sub-resource.
///
/// OneBox and DCP deployments never have a record in the system of record,
/// so an invalid one is deleted outright — unless the operator protection
/// tag vetoes it. An invalid instance is cross-checked against the
/// snapshot: any matched record still in an active state may be carrying
/// billing, so the collection goes to the investigation list instead of
/// straight deletion.
///
/// Abandoned partitions are always safe to delete; abandoned clusters
/// cannot normally exist (the managing relationship keeps their parent
/// alive) and are surfaced for manual review instead.
pub fn plan_cleanup(
    invalid: Vec<InstanceCollection>,
    abandoned: &[ClassifiedResource],
    snapshot: &[ExternalRecord],
) -> CleanupPlan {
    let mut plan = CleanupPlan::default();

    for collection in invalid {
        match collection.resource_type {
            ResourceKind::OneBox | ResourceKind::DevControlPlane => {
                if collection.parent.group.is_protected() {
                    info!(
                        instance = %collection.instance_name,
                        kind = %collection.resource_type,
                        "invalid deployment is protected by tag, skipping"
                    );
                    continue;
                }
                plan.delete_list.push(collection.parent);
            }
            _ => {
                let matches: Vec<ExternalRecord> = snapshot
                    .iter()
                    .filter(|r| r.instance_name.eq_ignore_ascii_case(&collection.instance_name))
                    .cloned()
                    .collect();

                if requires_investigation(&matches) {
                    plan.investigations.push((collection, matches));
                } else {
                    // clusters are swept away with the parent; partitions
                    // are standalone groups and must be listed explicitly
                    plan.delete_list.push(collection.parent);
                    plan.delete_list.extend(collection.partitions);
                }
            }
        }
    }

    for resource in abandoned {
        match resource.kind {
            ResourceKind::Partition => plan.delete_list.push(resource.clone()),
            _ => warn!(
                instance = %resource.instance_name,
                group = %resource.group.name,
                "abandoned cluster needs manual review, not auto-deleting"
            ),
        }
    }

    plan
}
