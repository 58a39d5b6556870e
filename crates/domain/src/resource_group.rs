use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tag carrying the UTC timestamp after which a group may be deleted.
pub const EXPIRATION_TAG: &str = "expiration";
/// Tag stamped just before a deletion is issued, so lingering groups are visible.
pub const DELETION_ATTEMPT_TAG: &str = "deleteattempted";
/// Protection tag. A group tagged `delete=false` must never be auto-deleted.
pub const PROTECTION_TAG: &str = "delete";

/// A cloud resource group as yielded by the resource-group lister: the
/// group name, its tag set, and the owning resource when the group is
/// managed by another resource (e.g. a cluster auto-scaler).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceGroup {
    pub name: String,
    #[serde(default)]
    pub tags: HashMap<String, String>,
    #[serde(default)]
    pub managed_by: Option<String>,
}

impl ResourceGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: HashMap::new(),
            managed_by: None,
        }
    }

    pub fn with_tag(mut self, key: &str, value: &str) -> Self {
        self.tags.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_managed_by(mut self, owner: impl Into<String>) -> Self {
        self.managed_by = Some(owner.into());
        self
    }

    /// A group is managed when another resource owns it. Managed groups are
    /// cleaned up through their owner, never directly.
    pub fn is_managed(&self) -> bool {
        self.managed_by.as_deref().is_some_and(|m| !m.is_empty())
    }

    pub fn has_expiration(&self) -> bool {
        self.tags.contains_key(EXPIRATION_TAG)
    }

    /// Parsed expiration timestamp, or `None` when the tag is absent or does
    /// not parse as RFC 3339.
    pub fn expiration_date(&self) -> Option<DateTime<Utc>> {
        self.tags
            .get(EXPIRATION_TAG)
            .and_then(|v| DateTime::parse_from_rfc3339(v).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiration_date().is_some_and(|exp| exp <= now)
    }

    /// `delete=false` is the operator escape hatch that vetoes every
    /// automated deletion path.
    pub fn is_protected(&self) -> bool {
        self.tags
            .get(PROTECTION_TAG)
            .is_some_and(|v| v.eq_ignore_ascii_case("false"))
    }

    pub fn deletion_attempted(&self) -> bool {
        self.tags.contains_key(DELETION_ATTEMPT_TAG)
    }
}
