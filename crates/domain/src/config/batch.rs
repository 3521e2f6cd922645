use serde::{Deserialize, Serialize};

/// Where rows come from, where the report goes, and how far chains are followed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BatchConfig {
    #[serde(default = "default_input_path")]
    pub input_path: String,

    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Maximum CNAME hops followed before a chain is reported as too long (default: 5)
    #[serde(default = "default_max_cname_depth")]
    pub max_cname_depth: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            max_cname_depth: default_max_cname_depth(),
        }
    }
}

fn default_input_path() -> String {
    "input.csv".to_string()
}

fn default_output_path() -> String {
    "output.csv".to_string()
}

fn default_max_cname_depth() -> usize {
    5
}
