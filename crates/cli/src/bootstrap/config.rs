use nslookup_domain::{CliOverrides, Config};
use nslookup_infrastructure::system::default_nameserver;
use std::net::{IpAddr, SocketAddr};
use tracing::debug;

pub fn load_config(config_path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    Ok(config)
}

/// Picks the upstream server: the configured one, else the first
/// `nameserver` of the resolver file. Host names are resolved through the
/// system resolver.
pub async fn resolve_server(config: &Config) -> anyhow::Result<SocketAddr> {
    let host = match &config.upstream.server {
        Some(server) => server.trim().to_string(),
        None => default_nameserver(&config.upstream.resolv_conf),
    };
    let port = config.upstream.port;

    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, port));
    }

    let addr = tokio::net::lookup_host((host.as_str(), port))
        .await
        .map_err(|e| anyhow::anyhow!("Cannot resolve server {}: {}", host, e))?
        .next()
        .ok_or_else(|| anyhow::anyhow!("Server {} has no address", host))?;

    debug!(server = %host, addr = %addr, "Resolved server host name");
    Ok(addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_server_literal_ip() {
        let mut config = Config::default();
        config.upstream.server = Some("9.9.9.9".to_string());
        config.upstream.port = 5353;

        let addr = resolve_server(&config).await.unwrap();
        assert_eq!(addr, "9.9.9.9:5353".parse().unwrap());
    }

    #[tokio::test]
    async fn test_resolve_server_ipv6_literal() {
        let mut config = Config::default();
        config.upstream.server = Some("2001:4860:4860::8888".to_string());

        let addr = resolve_server(&config).await.unwrap();
        assert!(addr.is_ipv6());
        assert_eq!(addr.port(), 53);
    }

    #[tokio::test]
    async fn test_resolve_server_falls_back_without_resolv_conf() {
        let mut config = Config::default();
        config.upstream.resolv_conf = "/nonexistent/resolv.conf".to_string();

        let addr = resolve_server(&config).await.unwrap();
        assert_eq!(addr, "127.0.0.53:53".parse().unwrap());
    }

    #[test]
    fn test_load_config_rejects_invalid_override() {
        let overrides = CliOverrides {
            port: Some(0),
            ..Default::default()
        };
        let err = load_config(None, overrides).unwrap_err();
        assert!(err.to_string().contains("Port cannot be 0"));
    }
}
