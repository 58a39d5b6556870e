use subsweep_domain::{ClassifiedResource, ResourceGroup, ResourceKind};
use tracing::warn;

/// Naming rules, evaluated in precedence order. All matching is done on
/// the lower-cased group name.
pub const INSTANCE_PREFIX: &str = "compute-rg-";
pub const CLUSTER_PREFIX: &str = "mc_compute-rg-";
pub const PARTITION_PREFIX: &str = "datapartition-rg-";
pub const ONEBOX_MARKER: &str = "cloud-onebox";
pub const DCP_MARKER: &str = "dev-controlplane";

/// Classify one resource group by its naming convention, or `None` when no
/// rule matches or the instance name cannot be extracted.
///
/// The onebox marker is ambiguous on its own: a group carrying it that is
/// managed by another resource is the deployment's cluster, not the onebox
/// itself.
pub fn classify_group(group: &ResourceGroup) -> Option<ClassifiedResource> {
    let name = group.name.to_lowercase();

    let kind = if name.starts_with(INSTANCE_PREFIX) {
        ResourceKind::Instance
    } else if name.contains(ONEBOX_MARKER) {
        if group.is_managed() {
            ResourceKind::Cluster
        } else {
            ResourceKind::OneBox
        }
    } else if name.starts_with(CLUSTER_PREFIX) {
        ResourceKind::Cluster
    } else if name.starts_with(PARTITION_PREFIX) {
        ResourceKind::Partition
    } else if name.contains(DCP_MARKER) {
        ResourceKind::DevControlPlane
    } else {
        return None;
    };

    let instance_name = extract_instance_name(&name, kind)?;
    Some(ClassifiedResource::new(instance_name, kind, group.clone()))
}

/// Classify a subscription's resource groups into a flat list. Names that
/// match a prefix rule but are too short to carry an instance name are a
/// data-quality signal: they are excluded, counted, and surfaced at WARN.
pub fn classify_groups(groups: &[ResourceGroup]) -> Vec<ClassifiedResource> {
    let mut classified = Vec::new();
    let mut malformed = 0usize;

    for group in groups {
        match classify_group(group) {
            Some(resource) => classified.push(resource),
            None if matches_any_rule(&group.name.to_lowercase()) => malformed += 1,
            None => {}
        }
    }

    if malformed > 0 {
        warn!(
            count = malformed,
            "resource groups matched a naming rule but carried no instance name"
        );
    }

    classified
}

fn matches_any_rule(name: &str) -> bool {
    name.starts_with(INSTANCE_PREFIX)
        || name.contains(ONEBOX_MARKER)
        || name.starts_with(CLUSTER_PREFIX)
        || name.starts_with(PARTITION_PREFIX)
        || name.contains(DCP_MARKER)
}

/// Instance-name extraction over the `-`-delimited segments of the group
/// name.
///
/// OneBox and DCP groups lead with the instance name; an AKS-managed
/// variant prefixes it with `mc_`, so the portion after the `_` is taken.
/// Every other kind follows the `<kind>-rg-<instanceName>-<suffix>`
/// convention, so the third segment carries the name. Segment access is
/// guarded: a matched prefix with too few segments yields `None` rather
/// than a panic.
fn extract_instance_name(name: &str, kind: ResourceKind) -> Option<String> {
    let parts: Vec<&str> = name.split('-').collect();

    let token = match kind {
        ResourceKind::OneBox | ResourceKind::DevControlPlane => {
            let first = *parts.first()?;
            if first.contains('_') {
                first.split('_').nth(1)?
            } else {
                first
            }
        }
        _ => parts.get(2).copied()?,
    };

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
