use crate::resource_group::ResourceGroup;

/// Outcome of one expiration-tagging sweep over a subscription.
#[derive(Debug, Clone, Default)]
pub struct ExpirationSweepResult {
    /// Groups that received an expiration tag during this pass.
    pub tagged: Vec<String>,
    /// Groups whose tag attempt failed even after removing locks.
    pub tag_failures: Vec<String>,
    /// Expired groups left alone because they are protected or managed.
    pub expired_but_protected: Vec<String>,
    /// Groups carrying a deletion-attempt stamp from an earlier pass.
    pub previous_delete_attempts: Vec<String>,
    /// Groups past their expiration date and eligible for deletion.
    pub expired: Vec<ResourceGroup>,
}
