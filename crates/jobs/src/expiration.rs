use std::sync::Arc;
use std::time::Duration;
use subsweep_application::cache::{CacheDispatcher, SubscriptionSource};
use subsweep_application::use_cases::TagExpirationsUseCase;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Poll loop for the expiration-tagging sweep across all reachable
/// subscriptions.
pub struct ExpirationJob {
    sweep: Arc<TagExpirationsUseCase>,
    cache: Arc<CacheDispatcher>,
    service_id: String,
    subscription_filter: Vec<String>,
    interval: Duration,
    run_continuous: bool,
    shutdown: CancellationToken,
}

impl ExpirationJob {
    pub fn new(
        sweep: Arc<TagExpirationsUseCase>,
        cache: Arc<CacheDispatcher>,
        service_id: impl Into<String>,
    ) -> Self {
        Self {
            sweep,
            cache,
            service_id: service_id.into(),
            subscription_filter: Vec::new(),
            interval: Duration::from_secs(96 * 3600),
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
            "starting expiration check job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("ExpirationJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        self.run_pass().await;
                        if !self.run_continuous {
                            info!("ExpirationJob: single pass complete");
                            break;
                        }
                    }
                }
            }
        })
    }

    async fn run_pass(&self) {
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

        for subscription in &subscriptions.reachable {
            info!(subscription = %subscription.name, "checking group expirations");
            match self.sweep.execute(subscription).await {
                Ok(result) => info!(
                    subscription = %subscription.name,
                    tagged = result.tagged.len(),
                    expired = result.expired.len(),
                    protected = result.expired_but_protected.len(),
                    tag_failures = result.tag_failures.len(),
                    "expiration sweep complete"
                ),
                Err(e) => {
                    // one bad subscription must not end the pass
                    error!(subscription = %subscription.name, error = %e, "expiration sweep failed")
                }
            }
        }
    }
}
