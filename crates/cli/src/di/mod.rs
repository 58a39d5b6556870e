use std::sync::Arc;
use subsweep_application::cache::{CacheDispatcher, SubscriptionSource, ZoneRecordsSource};
use subsweep_application::ports::HostResolver;
use subsweep_application::use_cases::{
    CleanupInstancesUseCase, DnsPruneOptions, PruneDnsRecordsUseCase, TagExpirationsUseCase,
};
use subsweep_domain::Config;
use subsweep_infrastructure::{SnapshotStore, SystemHostResolver};
use subsweep_jobs::{DnsCleanupJob, ExpirationJob, InstanceCleanupJob, JobRunner};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub struct Services {
    pub runner: JobRunner,
    pub shutdown: CancellationToken,
}

/// Wire the collaborator adapters, the shared cache, the use cases and
/// the jobs for whatever services the config activates.
pub fn build_services(config: &Config) -> anyhow::Result<Services> {
    let store = Arc::new(SnapshotStore::from_file(&config.snapshot.path)?);
    info!(path = %config.snapshot.path, "snapshot loaded");

    let cache = Arc::new(CacheDispatcher::new());
    cache.register(SubscriptionSource::new(
        store.clone(),
        config.cache.subscription_ttl(),
    ));
    cache.register(ZoneRecordsSource::new(
        store.clone(),
        config.cache.zone_records_ttl(),
    ));

    let resolver: Arc<dyn HostResolver> = if config.snapshot.system_resolver {
        Arc::new(SystemHostResolver)
    } else {
        store.clone()
    };

    let shutdown = CancellationToken::new();
    let mut runner = JobRunner::new();
    let execution = &config.execution;

    if execution.instance_cleanup.active {
        let cleanup = Arc::new(CleanupInstancesUseCase::new(
            store.clone(),
            store.clone(),
            store.clone(),
            cache.clone(),
            config.dns.clone(),
            execution.instance_cleanup.execute_cleanup,
        ));
        let job = InstanceCleanupJob::new(
            cleanup,
            store.clone(),
            cache.clone(),
            config.directory.service_id.clone(),
        )
        .with_subscription_filter(config.directory.subscription_filter.clone())
        .with_schedule(
            execution.instance_cleanup.timeout(),
            execution.instance_cleanup.run_continuous,
        )
        .with_cancellation(shutdown.clone());
        runner = runner.with_instance_cleanup(job);
    } else {
        info!("instance cleanup service is not active");
    }

    if execution.dns_cleanup.active {
        match config
            .dns
            .zone_for_environment(&execution.dns_cleanup.target_environment)
        {
            Some(zone) => {
                let prune = Arc::new(PruneDnsRecordsUseCase::new(
                    cache.clone(),
                    store.clone(),
                    resolver,
                ));
                let job = DnsCleanupJob::new(
                    prune,
                    zone.clone(),
                    DnsPruneOptions::from(&execution.dns_cleanup),
                )
                .with_schedule(
                    execution.dns_cleanup.timeout(),
                    execution.dns_cleanup.run_continuous,
                )
                .with_cancellation(shutdown.clone());
                runner = runner.with_dns_cleanup(job);
            }
            None => warn!(
                environment = %execution.dns_cleanup.target_environment,
                "no DNS zone configured for target environment, DNS cleanup disabled"
            ),
        }
    } else {
        info!("DNS cleanup service is not active");
    }

    if execution.expiration.active {
        let sweep = Arc::new(TagExpirationsUseCase::new(
            store.clone(),
            execution.expiration.days_to_expiration,
        ));
        let job = ExpirationJob::new(sweep, cache, config.directory.service_id.clone())
            .with_subscription_filter(config.directory.subscription_filter.clone())
            .with_schedule(
                execution.expiration.timeout(),
                execution.expiration.run_continuous,
            )
            .with_cancellation(shutdown.clone());
        runner = runner.with_expiration(job);
    } else {
        info!("expiration check service is not active");
    }

    Ok(Services { runner, shutdown })
}
