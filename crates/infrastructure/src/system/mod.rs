pub mod resolv_conf;

pub use resolv_conf::{default_nameserver, parse_nameserver, FALLBACK_NAMESERVER};
