use async_trait::async_trait;
use std::fmt;

/// Failure modes of a host lookup. Only `HostNotFound` marks a CNAME
/// target as dangling; every other failure is inconclusive and must not
/// flag the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    HostNotFound,
    Other(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::HostNotFound => write!(f, "host not found"),
            ResolveError::Other(reason) => write!(f, "resolution failed: {reason}"),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Forward resolution of a host name, used to detect dangling CNAME
/// targets.
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn resolve(&self, host: &str) -> Result<(), ResolveError>;
}
