use nslookup_application::use_cases::LookupUseCase;
use nslookup_domain::Config;
use nslookup_infrastructure::dns::{DnsTransport, UdpTransport, WireResolver};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub struct LookupServices {
    pub lookup: LookupUseCase,
}

impl LookupServices {
    pub fn new(config: &Config, server: SocketAddr) -> Self {
        let transport: Arc<dyn DnsTransport> = Arc::new(UdpTransport::new(server));
        let timeout = Duration::from_secs(config.upstream.timeout_secs);

        let resolver = WireResolver::new(transport, timeout).with_attempts(config.upstream.attempts);

        debug!(
            server = %server,
            timeout_secs = config.upstream.timeout_secs,
            attempts = config.upstream.attempts,
            "Lookup services ready"
        );

        Self {
            lookup: LookupUseCase::new(Arc::new(resolver)),
        }
    }
}
