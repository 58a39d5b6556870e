use std::sync::Arc;
use std::time::Duration;
use subsweep_application::cache::{CacheDispatcher, SubscriptionSource};
use subsweep_application::ports::InstanceRecordReader;
use subsweep_application::use_cases::CleanupInstancesUseCase;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Poll loop for the instance cleanup pass: load the system-of-record
/// snapshot once, then walk every reachable subscription sequentially.
/// Cancellation is observed between passes; in-flight work finishes.
pub struct InstanceCleanupJob {
    cleanup: Arc<CleanupInstancesUseCase>,
    records: Arc<dyn InstanceRecordReader>,
    cache: Arc<CacheDispatcher>,
    service_id: String,
    subscription_filter: Vec<String>,
    interval: Duration,
    run_continuous: bool,
    shutdown: CancellationToken,
}

impl InstanceCleanupJob {
    pub fn new(
        cleanup: Arc<CleanupInstancesUseCase>,
        records: Arc<dyn InstanceRecordReader>,
        cache: Arc<CacheDispatcher>,
        service_id: impl Into<String>,
    ) -> Self {
        Self {
            cleanup,
            records,
            cache,
            service_id: service_id.into(),
            subscription_filter: Vec::new(),
            interval: Duration::from_secs(24 * 3600),
            run_continuous: true,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_subscription_filter(mut self, filter: Vec<String>) -> Self {
        self.subscription_filter = filter;
        self
    }

    pub fn with_schedule(mut self, interval: Duration, run_continuous: bool) -> Self {
        self.interval = interval;
        self.run_continuous = run_continuous;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(
            interval_secs = self.interval.as_secs(),
            run_continuous = self.run_continuous,
            "starting instance cleanup job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("InstanceCleanupJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        self.run_pass().await;
                        if !self.run_continuous {
                            info!("InstanceCleanupJob: single pass complete");
                            break;
                        }
                    }
                }
            }
        })
    }

    async fn run_pass(&self) {
        info!("starting cleanup pass");

        let snapshot = match self.records.fetch_instance_records().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!(error = %e, "failed to load system-of-record snapshot, skipping pass");
                return;
            }
        };
        info!(records = snapshot.len(), "loaded system-of-record snapshot");

        let subscriptions = match self
            .cache
            .get::<SubscriptionSource>(self.service_id.clone())
            .await
        {
            Ok(set) => set.filtered(&self.subscription_filter),
            Err(e) => {
                error!(error = %e, "failed to load subscriptions, skipping pass");
                return;
            }
        };

        if !subscriptions.unreachable.is_empty() {
            warn!(
                count = subscriptions.unreachable.len(),
                "skipping unreachable subscriptions"
            );
        }

        for subscription in &subscriptions.reachable {
            info!(subscription = %subscription.name, "managing subscription");
            match self.cleanup.execute(subscription, &snapshot).await {
                Ok(outcome) => info!(
                    subscription = %subscription.name,
                    invalid = outcome.invalid_instances.len(),
                    abandoned = outcome.abandoned_resources.len(),
                    investigated = outcome.investigated_instances.len(),
                    scheduled = outcome.groups_to_delete,
                    deleted = outcome.groups_deleted,
                    executed = outcome.executed,
                    "subscription cleanup complete"
                ),
                Err(e) => {
                    error!(subscription = %subscription.name, error = %e, "subscription cleanup failed")
                }
            }
        }

        info!("cleanup pass complete");
    }
}
