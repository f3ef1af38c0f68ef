use crate::dns::transport::DnsTransport;
use crate::dns::wire::decode_response;
use crate::dns::wire::header::decode_header;
use crate::dns::wire::query::QueryEncoder;
use async_trait::async_trait;
use nslookup_application::ports::DnsResolver;
use nslookup_domain::{DnsQuery, DomainError, ResponseOutcome};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// [`DnsResolver`] that speaks the wire protocol through a [`DnsTransport`].
pub struct WireResolver {
    transport: Arc<dyn DnsTransport>,
    timeout: Duration,
    attempts: u8,
}

impl WireResolver {
    pub fn new(transport: Arc<dyn DnsTransport>, timeout: Duration) -> Self {
        Self {
            transport,
            timeout,
            attempts: 1,
        }
    }

    /// Total sends per query; only timeouts trigger another one.
    pub fn with_attempts(mut self, attempts: u8) -> Self {
        self.attempts = attempts.max(1);
        self
    }

    async fn exchange(&self, bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let mut attempt = 1;
        loop {
            match self.transport.send(bytes, self.timeout).await {
                Ok(response) => return Ok(response.bytes),
                Err(e @ DomainError::TransportTimeout { .. }) if attempt < self.attempts => {
                    warn!(
                        server = %self.transport.server_addr(),
                        attempt,
                        attempts = self.attempts,
                        error = %e,
                        "Query timed out, retrying"
                    );
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[async_trait]
impl DnsResolver for WireResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<ResponseOutcome, DomainError> {
        let encoded = QueryEncoder::from_query(query)?;

        debug!(
            server = %self.transport.server_addr(),
            protocol = self.transport.protocol_name(),
            domain = %encoded.query_name,
            record_type = %encoded.record_type,
            id = encoded.query_id,
            "Sending query"
        );

        let reply = self.exchange(&encoded.bytes).await?;

        if let Ok(header) = decode_header(&reply) {
            if header.flags.truncated {
                warn!(
                    server = %self.transport.server_addr(),
                    domain = %encoded.query_name,
                    "Reply is truncated (TC set); showing what was received"
                );
            }
        }

        decode_response(
            &reply,
            encoded.question_len,
            &encoded.query_name,
            encoded.query_id,
        )
    }
}
