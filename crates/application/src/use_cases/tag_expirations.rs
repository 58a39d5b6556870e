use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use subsweep_domain::resource_group::EXPIRATION_TAG;
use subsweep_domain::{DomainError, ExpirationSweepResult, Subscription};
use tracing::{info, instrument, warn};

use crate::ports::ResourceGroupRepository;

/// Use case: make sure every resource group carries an expiration tag and
/// report which ones are past it. Tagging only; deletion of expired
/// groups stays a manual follow-up.
pub struct TagExpirationsUseCase {
    groups: Arc<dyn ResourceGroupRepository>,
    days_to_expiration: i64,
}

impl TagExpirationsUseCase {
    pub fn new(groups: Arc<dyn ResourceGroupRepository>, days_to_expiration: i64) -> Self {
        Self { groups, days_to_expiration }
    }

    #[instrument(skip(self), fields(subscription = %subscription.name))]
    pub async fn execute(
        &self,
        subscription: &Subscription,
    ) -> Result<ExpirationSweepResult, DomainError> {
        let now = Utc::now();
        let latest_expiration = now + Duration::days(self.days_to_expiration);

        let groups = self.groups.list_groups(&subscription.id).await?;
        let mut result = ExpirationSweepResult::default();

        for group in groups {
            if group.deletion_attempted() {
                result.previous_delete_attempts.push(group.name.clone());
            }

            if !group.has_expiration() {
                if self
                    .try_tag(&subscription.id, &group.name, latest_expiration)
                    .await
                {
                    result.tagged.push(group.name.clone());
                } else {
                    result.tag_failures.push(group.name.clone());
                }
            } else if group.is_expired(now) {
                if group.is_protected() || group.is_managed() {
                    result.expired_but_protected.push(group.name.clone());
                } else {
                    result.expired.push(group);
                }
            }
        }

        info!(
            tagged = result.tagged.len(),
            tag_failures = result.tag_failures.len(),
            expired = result.expired.len(),
            expired_but_protected = result.expired_but_protected.len(),
            previous_attempts = result.previous_delete_attempts.len(),
            "expiration sweep complete"
        );

        Ok(result)
    }

    /// A locked group rejects tagging, so one failed attempt gets the
    /// locks removed and a second try.
    async fn try_tag(
        &self,
        subscription_id: &str,
        group_name: &str,
        expiration: DateTime<Utc>,
    ) -> bool {
        let value = expiration.to_rfc3339();
        if self
            .groups
            .set_tag(subscription_id, group_name, EXPIRATION_TAG, &value)
            .await
            .is_ok()
        {
            return true;
        }

        if let Err(e) = self.groups.remove_locks(subscription_id, group_name).await {
            warn!(group = %group_name, error = %e, "failed to remove locks before retag");
        }
        match self
            .groups
            .set_tag(subscription_id, group_name, EXPIRATION_TAG, &value)
            .await
        {
            Ok(()) => true,
            Err(e) => {
                warn!(group = %group_name, error = %e, "expiration tag attempt failed twice");
                false
            }
        }
    }
}
