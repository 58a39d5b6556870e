//! Shared, time-boxed cache for expensive collaborator calls.
//!
//! Several independent passes need the same slow lookups (subscription
//! discovery, full zone-record listings). Each lookup is modelled as a
//! [`CacheSource`] registered on one process-wide [`CacheDispatcher`];
//! callers ask for the source's value by type and observe no difference
//! between a fresh and a cached result except latency.

pub mod dispatcher;
pub mod sources;

pub use dispatcher::{CacheDispatcher, CacheSource};
pub use sources::{SubscriptionSource, ZoneRecordsSource};
