use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource listing failed: {0}")]
    ResourceListing(String),

    #[error("Resource mutation failed: {0}")]
    ResourceMutation(String),

    #[error("Record query failed: {0}")]
    RecordQuery(String),

    #[error("Document store error: {0}")]
    DocumentStore(String),

    #[error("DNS zone error: {0}")]
    DnsZone(String),

    #[error("Invalid record payload: {0}")]
    InvalidPayload(String),

    #[error("Cache configuration error: {0}")]
    CacheConfiguration(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),
}
