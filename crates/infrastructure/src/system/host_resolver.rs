use async_trait::async_trait;
use subsweep_application::ports::{HostResolver, ResolveError};
use tracing::debug;

/// Host resolution through the operating system's resolver.
///
/// `lookup_host` surfaces every getaddrinfo failure as an `io::Error`, so
/// the definitive name-not-known case has to be told apart from transient
/// failures by the reported message. Anything unrecognized maps to
/// `ResolveError::Other`, which callers treat as inconclusive.
pub struct SystemHostResolver;

#[async_trait]
impl HostResolver for SystemHostResolver {
    async fn resolve(&self, host: &str) -> Result<(), ResolveError> {
        match tokio::net::lookup_host((host, 0u16)).await {
            Ok(_) => {
                debug!(host = %host, "host resolved");
                Ok(())
            }
            Err(e) if is_name_error(&e) => {
                debug!(host = %host, "host not found");
                Err(ResolveError::HostNotFound)
            }
            Err(e) => Err(ResolveError::Other(e.to_string())),
        }
    }
}

fn is_name_error(err: &std::io::Error) -> bool {
    if err.kind() == std::io::ErrorKind::NotFound {
        return true;
    }
    let text = err.to_string().to_lowercase();
    // glibc / musl / BSD getaddrinfo wordings for EAI_NONAME
    text.contains("name or service not known")
        || text.contains("no such host")
        || text.contains("nodename nor servname provided")
        || text.contains("no address associated with hostname")
}
