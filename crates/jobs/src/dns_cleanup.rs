use std::sync::Arc;
use std::time::Duration;
use subsweep_application::use_cases::{DnsPruneOptions, PruneDnsRecordsUseCase};
use subsweep_domain::config::DnsZoneEnvironment;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Poll loop for the dangling-DNS sweep over one zone.
pub struct DnsCleanupJob {
    prune: Arc<PruneDnsRecordsUseCase>,
    zone: DnsZoneEnvironment,
    options: DnsPruneOptions,
    interval: Duration,
    run_continuous: bool,
    shutdown: CancellationToken,
}

impl DnsCleanupJob {
    pub fn new(
        prune: Arc<PruneDnsRecordsUseCase>,
        zone: DnsZoneEnvironment,
        options: DnsPruneOptions,
    ) -> Self {
        Self {
            prune,
            zone,
            options,
            interval: Duration::from_secs(24 * 3600),
            run_continuous: true,
            shutdown: CancellationToken::new(),
        }
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
            zone = %self.zone.zone_name,
            interval_secs = self.interval.as_secs(),
            "starting DNS cleanup job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("DnsCleanupJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        self.run_pass().await;
                        if !self.run_continuous {
                            info!("DnsCleanupJob: single pass complete");
                            break;
                        }
                    }
                }
            }
        })
    }

    async fn run_pass(&self) {
        info!(zone = %self.zone.zone_name, "searching zone for dangling records");
        match self.prune.execute(&self.zone, &self.options).await {
            Ok(outcome) => info!(
                zone = %self.zone.zone_name,
                flagged = outcome.flagged,
                cname_deleted = outcome.cname_records_deleted,
                a_deleted = outcome.a_records_deleted,
                "DNS sweep complete"
            ),
            Err(e) => error!(zone = %self.zone.zone_name, error = %e, "DNS sweep failed"),
        }
    }
}
