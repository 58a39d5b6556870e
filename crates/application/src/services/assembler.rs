use std::collections::HashSet;
use subsweep_domain::{ClassifiedResource, InstanceCollection, ResourceKind};

/// Group classified resources into one collection per parent resource.
///
/// Sub-resources attach by exact instance-name equality. Two parents
/// sharing an instance name produce two collections; deduplication is not
/// attempted here.
pub fn assemble_collections(resources: &[ClassifiedResource]) -> Vec<InstanceCollection> {
    resources
        .iter()
        .filter(|r| r.kind.is_parent())
        .map(|parent| {
            let mut collection = InstanceCollection::new(parent.clone());
            for resource in resources {
                if resource.instance_name != parent.instance_name {
                    continue;
                }
                match resource.kind {
                    ResourceKind::Cluster => collection.clusters.push(resource.clone()),
                    ResourceKind::Partition => collection.partitions.push(resource.clone()),
                    _ => {}
                }
            }
            collection
        })
        .collect()
}

/// Sub-resources whose instance name matches no assembled collection.
///
/// A sub-resource matching any collection is never abandoned, even when
/// that collection is itself invalid.
pub fn find_abandoned(
    resources: &[ClassifiedResource],
    collections: &[InstanceCollection],
) -> Vec<ClassifiedResource> {
    let instance_names: HashSet<&str> = collections
        .iter()
        .map(|c| c.instance_name.as_str())
        .collect();

    resources
        .iter()
        .filter(|r| matches!(r.kind, ResourceKind::Cluster | ResourceKind::Partition))
        .filter(|r| !instance_names.contains(r.instance_name.as_str()))
        .cloned()
        .collect()
}
