pub mod directory;
pub mod dns_zone;
pub mod documents;
pub mod host_resolver;
pub mod records;
pub mod resource_groups;

pub use directory::SubscriptionDirectory;
pub use dns_zone::DnsZoneReader;
pub use documents::DocumentStore;
pub use host_resolver::{HostResolver, ResolveError};
pub use records::InstanceRecordReader;
pub use resource_groups::ResourceGroupRepository;
