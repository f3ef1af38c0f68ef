mod config;
mod logging;

pub use config::{load_config, resolve_server};
pub use logging::init_logging;
