//! Default name server discovery from `resolv.conf`.

use tracing::debug;

/// Used when no `nameserver` line can be read (systemd-resolved stub).
pub const FALLBACK_NAMESERVER: &str = "127.0.0.53";

/// First `nameserver` address in resolv.conf-formatted text.
pub fn parse_nameserver(contents: &str) -> Option<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with(';'))
        .find_map(|line| {
            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next()) {
                (Some("nameserver"), Some(addr)) => Some(addr.to_string()),
                _ => None,
            }
        })
}

/// Reads `path` and returns its first name server, or
/// [`FALLBACK_NAMESERVER`] when the file is missing or has none.
pub fn default_nameserver(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_nameserver(&contents).unwrap_or_else(|| {
            debug!(path, "No nameserver entry, using fallback");
            FALLBACK_NAMESERVER.to_string()
        }),
        Err(e) => {
            debug!(path, error = %e, "Cannot read resolver config, using fallback");
            FALLBACK_NAMESERVER.to_string()
        }
    }
}
