use serde::{Deserialize, Serialize};

/// Configuration from noteblocks.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print JSON instead of the human-readable outline
    #[serde(default)]
    pub json: bool,
    /// Indent JSON output
    #[serde(default = "default_true")]
    pub pretty: bool,
    /// Number ids sequentially (`b1`, `b2`, ...) instead of random UUIDs
    #[serde(default)]
    pub stable_ids: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            json: false,
            pretty: true,
            stable_ids: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive used when NB_LOG is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: default_log_filter(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}
