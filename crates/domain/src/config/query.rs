use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    #[serde(default = "default_true")]
    pub recursion_desired: bool,

    /// `"default"` (A then AAAA), `"any"`, or a record type name.
    #[serde(default = "default_type")]
    pub default_type: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            recursion_desired: default_true(),
            default_type: default_type(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_type() -> String {
    "default".to_string()
}
