use serde::{Deserialize, Serialize};

/// Where queries are sent and how long to wait for each reply.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Name server address. `None` means "first nameserver in resolv.conf".
    #[serde(default)]
    pub server: Option<String>,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Sends per query; only timeouts are retried.
    #[serde(default = "default_attempts")]
    pub attempts: u8,

    #[serde(default = "default_resolv_conf")]
    pub resolv_conf: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            server: None,
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            attempts: default_attempts(),
            resolv_conf: default_resolv_conf(),
        }
    }
}

fn default_port() -> u16 {
    53
}

fn default_timeout_secs() -> u64 {
    50
}

fn default_attempts() -> u8 {
    1
}

fn default_resolv_conf() -> String {
    "/etc/resolv.conf".to_string()
}
