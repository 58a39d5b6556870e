use crate::external_record::ExternalRecord;
use crate::resource_group::ResourceGroup;
use std::fmt;

/// Role a resource group plays within a deployed instance, inferred from
/// its naming convention alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Top-level deployment unit. Expected to own a cluster and at least
    /// one data partition.
    Instance,
    /// Compute cluster group, managed by its instance.
    Cluster,
    /// Data partition group.
    Partition,
    /// Single-box deployment variant. Owns a cluster, never a partition.
    OneBox,
    /// Dev control plane. Owns no sub-resources.
    DevControlPlane,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Instance => "Instance",
            ResourceKind::Cluster => "Cluster",
            ResourceKind::Partition => "Partition",
            ResourceKind::OneBox => "OneBox",
            ResourceKind::DevControlPlane => "DCP",
        }
    }

    /// Parent kinds anchor an [`InstanceCollection`]; clusters and
    /// partitions only ever attach to one.
    pub fn is_parent(&self) -> bool {
        matches!(
            self,
            ResourceKind::Instance | ResourceKind::OneBox | ResourceKind::DevControlPlane
        )
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resource group that matched a naming rule, carrying the instance name
/// extracted from the group name.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedResource {
    pub instance_name: String,
    pub kind: ResourceKind,
    pub group: ResourceGroup,
}

impl ClassifiedResource {
    pub fn new(instance_name: impl Into<String>, kind: ResourceKind, group: ResourceGroup) -> Self {
        Self {
            instance_name: instance_name.into(),
            kind,
            group,
        }
    }
}

/// One deployed instance reconstructed from classified resource groups:
/// a parent group plus the clusters and partitions sharing its instance
/// name. Attachment is by exact instance-name equality, never by
/// resource-group containment.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceCollection {
    pub resource_type: ResourceKind,
    pub instance_name: String,
    pub parent: ClassifiedResource,
    pub clusters: Vec<ClassifiedResource>,
    pub partitions: Vec<ClassifiedResource>,
}

impl InstanceCollection {
    pub fn new(parent: ClassifiedResource) -> Self {
        Self {
            resource_type: parent.kind,
            instance_name: parent.instance_name.clone(),
            parent,
            clusters: Vec::new(),
            partitions: Vec::new(),
        }
    }

    /// Structural validity of the collection:
    /// - `OneBox` needs a cluster,
    /// - `Instance` needs a cluster and at least one partition,
    /// - `DCP` has no expected sub-resources and is always valid.
    ///
    /// Anything else (a sub-resource kind standing as a parent) is invalid.
    pub fn is_valid(&self) -> bool {
        match self.resource_type {
            ResourceKind::OneBox => !self.clusters.is_empty(),
            ResourceKind::Instance => !self.clusters.is_empty() && !self.partitions.is_empty(),
            ResourceKind::DevControlPlane => true,
            _ => false,
        }
    }
}

/// Outcome of the cleanup decision step for one subscription pass: groups
/// safe to delete outright, and collections that must be reconciled with
/// the system of record first. Built fresh per pass, never persisted.
#[derive(Debug, Clone, Default)]
pub struct CleanupPlan {
    pub delete_list: Vec<ClassifiedResource>,
    pub investigations: Vec<(InstanceCollection, Vec<ExternalRecord>)>,
}
