use async_trait::async_trait;
use nslookup_domain::{DnsQuery, DomainError, ResponseOutcome};

/// Sends one question to a name server and decodes the reply.
///
/// Implementations return `Ok` only for NOERROR replies. Server rcodes come
/// back as [`DomainError::ServerError`], undecodable replies as one of the
/// structural variants and socket failures as a transport variant.
#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, query: &DnsQuery) -> Result<ResponseOutcome, DomainError>;
}
