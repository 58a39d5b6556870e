use serde::{Deserialize, Serialize};

/// A subscription enrolled for cleanup, as listed by the service
/// directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub name: String,
}

/// Directory listing split into subscriptions this process can reach and
/// those it cannot (missing role assignment, moved tenant, ...).
/// Unreachable subscriptions are reported, never processed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionSet {
    #[serde(default)]
    pub reachable: Vec<Subscription>,
    #[serde(default)]
    pub unreachable: Vec<Subscription>,
}

impl SubscriptionSet {
    /// Restrict the set to the given subscription ids; an empty filter
    /// keeps everything.
    pub fn filtered(&self, ids: &[String]) -> SubscriptionSet {
        if ids.is_empty() {
            return self.clone();
        }
        SubscriptionSet {
            reachable: self
                .reachable
                .iter()
                .filter(|s| ids.contains(&s.id))
                .cloned()
                .collect(),
            unreachable: self
                .unreachable
                .iter()
                .filter(|s| ids.contains(&s.id))
                .cloned()
                .collect(),
        }
    }
}
