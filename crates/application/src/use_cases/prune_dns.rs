use fancy_regex::Regex;
use std::collections::HashSet;
use std::sync::{Arc, LazyLock};
use subsweep_domain::config::{DnsCleanupConfig, DnsZoneEnvironment};
use subsweep_domain::{DomainError, ZoneRecord, ZoneRecordData};
use tracing::{info, instrument, warn};

use crate::cache::{CacheDispatcher, ZoneRecordsSource};
use crate::ports::{DnsZoneReader, HostResolver, ResolveError};

/// Ephemeral test instances follow the `it<NN...>` naming convention and
/// are the records most commonly left behind.
static TEST_INSTANCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^it\d{2,}").expect("test-instance pattern is valid"));

/// Which of the three independent filters run, and whether flagged
/// records are actually deleted.
#[derive(Debug, Clone)]
pub struct DnsPruneOptions {
    pub resolve_cname: bool,
    pub unmatched_a_records: bool,
    pub filter_test_instances: bool,
    pub execute_cleanup: bool,
}

impl From<&DnsCleanupConfig> for DnsPruneOptions {
    fn from(config: &DnsCleanupConfig) -> Self {
        Self {
            resolve_cname: config.resolve_cname,
            unmatched_a_records: config.unmatched_a_records,
            filter_test_instances: config.filter_test_instances,
            execute_cleanup: config.execute_cleanup,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DnsPruneOutcome {
    pub flagged: usize,
    pub a_records_deleted: usize,
    pub cname_records_deleted: usize,
}

/// Use case: find dangling records in a zone and (in execute mode) delete
/// them. The three filters are unioned, then de-duplicated so each record
/// sees at most one delete call.
pub struct PruneDnsRecordsUseCase {
    cache: Arc<CacheDispatcher>,
    zones: Arc<dyn DnsZoneReader>,
    resolver: Arc<dyn HostResolver>,
}

impl PruneDnsRecordsUseCase {
    pub fn new(
        cache: Arc<CacheDispatcher>,
        zones: Arc<dyn DnsZoneReader>,
        resolver: Arc<dyn HostResolver>,
    ) -> Self {
        Self { cache, zones, resolver }
    }

    #[instrument(skip(self, options), fields(zone = %zone.zone_name))]
    pub async fn execute(
        &self,
        zone: &DnsZoneEnvironment,
        options: &DnsPruneOptions,
    ) -> Result<DnsPruneOutcome, DomainError> {
        let records = self.cache.get::<ZoneRecordsSource>(zone.clone()).await?;

        let mut flagged: Vec<ZoneRecord> = Vec::new();

        if options.resolve_cname {
            info!("checking CNAME target resolution");
            flagged.extend(self.dangling_cname_records(&records).await);
        }

        if options.unmatched_a_records {
            info!("checking for A records without a CNAME root");
            flagged.extend(orphaned_a_records(&records));
        }

        if options.filter_test_instances {
            info!("checking for abandoned test-instance records");
            flagged.extend(test_instance_records(&records));
        }

        let mut seen: HashSet<(&'static str, String)> = HashSet::new();
        flagged.retain(|r| seen.insert((r.kind_label(), r.name.clone())));

        let mut outcome = DnsPruneOutcome { flagged: flagged.len(), ..Default::default() };
        info!(count = outcome.flagged, "records flagged for deletion");

        if options.execute_cleanup {
            for record in &flagged {
                match self.zones.delete_record(zone, record).await {
                    Ok(()) => match record.data {
                        ZoneRecordData::A { .. } => outcome.a_records_deleted += 1,
                        ZoneRecordData::Cname { .. } => outcome.cname_records_deleted += 1,
                    },
                    Err(e) => {
                        warn!(record = %record.name, error = %e, "DNS record delete failed")
                    }
                }
            }
            info!(
                cname = outcome.cname_records_deleted,
                a = outcome.a_records_deleted,
                "deleted dangling records"
            );
        }

        Ok(outcome)
    }

    /// CNAME records whose targets no longer resolve, plus every A record
    /// sharing an unresolvable record's base name. Only a definitive
    /// host-not-found flags a record; inconclusive failures leave it
    /// alone.
    async fn dangling_cname_records(&self, records: &[ZoneRecord]) -> Vec<ZoneRecord> {
        let mut flagged = Vec::new();
        let mut unresolved_bases: HashSet<String> = HashSet::new();

        for record in records.iter().filter(|r| r.is_cname()) {
            let ZoneRecordData::Cname { ref target } = record.data else {
                continue;
            };
            match self.resolver.resolve(target).await {
                Ok(()) => {}
                Err(ResolveError::HostNotFound) => {
                    unresolved_bases.insert(record.base_name().to_string());
                    flagged.push(record.clone());
                }
                Err(ResolveError::Other(reason)) => {
                    warn!(
                        record = %record.name,
                        target = %target,
                        reason = %reason,
                        "inconclusive resolution, not flagging"
                    );
                }
            }
        }

        if !unresolved_bases.is_empty() {
            for record in records.iter().filter(|r| r.is_a()) {
                if unresolved_bases.contains(record.base_name()) {
                    flagged.push(record.clone());
                }
            }
        }

        info!(count = flagged.len(), "records tied to unresolvable CNAME targets");
        flagged
    }
}

/// A records carrying a qualifying sub-path whose base name appears in no
/// CNAME record. These are leftovers from instances whose CNAME was
/// already removed.
fn orphaned_a_records(records: &[ZoneRecord]) -> Vec<ZoneRecord> {
    let cname_bases: HashSet<&str> = records
        .iter()
        .filter(|r| r.is_cname())
        .map(|r| r.base_name())
        .collect();

    records
        .iter()
        .filter(|r| r.is_a() && r.has_subpath() && !cname_bases.contains(r.base_name()))
        .cloned()
        .collect()
}

fn test_instance_records(records: &[ZoneRecord]) -> Vec<ZoneRecord> {
    records
        .iter()
        .filter(|r| TEST_INSTANCE_PATTERN.is_match(r.base_name()).unwrap_or(false))
        .cloned()
        .collect()
}
