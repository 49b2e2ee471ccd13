/// Default maximum bytes per JSON-RPC message (1 MiB).
const DEFAULT_MAX_MESSAGE_BYTES: usize = 1024 * 1024;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub seed_samples: bool,
    pub max_message_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            seed_samples: true,
            max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `NOTES_SEED_SAMPLES` (optional, default true) — start with the two sample notes
    /// - `NOTES_MAX_MESSAGE_BYTES` (optional, default 1 MiB) — max size of one request line
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let defaults = Self::default();

        let seed_samples = match lookup("NOTES_SEED_SAMPLES") {
            Some(val) => parse_bool(&val)
                .ok_or_else(|| "NOTES_SEED_SAMPLES must be true, false, 1 or 0".to_string())?,
            None => defaults.seed_samples,
        };

        let max_message_bytes = match lookup("NOTES_MAX_MESSAGE_BYTES") {
            Some(val) => val
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| "NOTES_MAX_MESSAGE_BYTES must be a positive integer".to_string())?,
            None => defaults.max_message_bytes,
        };

        Ok(Self {
            seed_samples,
            max_message_bytes,
        })
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
