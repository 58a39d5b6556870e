use crate::{DnsCleanupJob, ExpirationJob, InstanceCleanupJob};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Central orchestrator for the background services.
///
/// Register the active jobs with the builder methods, then call
/// `.start()` once; it returns one join handle per job so the host can
/// wait for completion or shutdown.
pub struct JobRunner {
    instance_cleanup: Option<InstanceCleanupJob>,
    dns_cleanup: Option<DnsCleanupJob>,
    expiration: Option<ExpirationJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            instance_cleanup: None,
            dns_cleanup: None,
            expiration: None,
        }
    }

    pub fn with_instance_cleanup(mut self, job: InstanceCleanupJob) -> Self {
        self.instance_cleanup = Some(job);
        self
    }

    pub fn with_dns_cleanup(mut self, job: DnsCleanupJob) -> Self {
        self.dns_cleanup = Some(job);
        self
    }

    pub fn with_expiration(mut self, job: ExpirationJob) -> Self {
        self.expiration = Some(job);
        self
    }

    /// Start all registered background jobs.
    pub fn start(self) -> Vec<JoinHandle<()>> {
        info!("starting background job runner");
        let mut handles = Vec::new();

        if let Some(job) = self.instance_cleanup {
            handles.push(Arc::new(job).start());
        }
        if let Some(job) = self.dns_cleanup {
            handles.push(Arc::new(job).start());
        }
        if let Some(job) = self.expiration {
            handles.push(Arc::new(job).start());
        }

        info!(count = handles.len(), "background jobs started");
        handles
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
