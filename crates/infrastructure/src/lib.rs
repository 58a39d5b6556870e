//! Subsweep Infrastructure Layer
//!
//! Adapters behind the application ports that need no cloud SDK: the
//! system host resolver and the JSON snapshot store used for offline runs
//! and integration tests.
pub mod snapshot;
pub mod system;

pub use snapshot::{Snapshot, SnapshotStore};
pub use system::SystemHostResolver;
