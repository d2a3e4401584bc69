//! Feed processor configuration.

use tracing::warn;

use crate::branding::AgencyInfo;

/// Environment variable overriding [`ProcessorConfig::batch_size`].
pub const BATCH_SIZE_VAR: &str = "FEED_BATCH_SIZE";

/// Environment variable overriding [`ProcessorConfig::numeric_ids`].
pub const NUMERIC_IDS_VAR: &str = "FEED_NUMERIC_IDS";

/// Configuration for a feed processing run.
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Records handed to one worker task at a time.
    pub batch_size: usize,

    /// Whether route and stop codes are resolved to numeric IDs.
    /// When off, output records carry no `id` and unmapped stops are not fatal.
    pub numeric_ids: bool,

    /// Agency block written to the output.
    pub agency: AgencyInfo,
}

impl ProcessorConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(batch_size: usize, numeric_ids: bool) -> Self {
        Self {
            batch_size,
            numeric_ids,
            agency: AgencyInfo::default(),
        }
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read overrides through `lookup`, keeping defaults for unset or
    /// unparseable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(BATCH_SIZE_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.batch_size = size,
                _ => warn!(var = BATCH_SIZE_VAR, value = %raw, "Ignoring invalid batch size"),
            }
        }

        if let Some(raw) = lookup(NUMERIC_IDS_VAR) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => config.numeric_ids = true,
                "0" | "false" | "no" | "off" => config.numeric_ids = false,
                _ => warn!(var = NUMERIC_IDS_VAR, value = %raw, "Ignoring invalid switch"),
            }
        }

        config
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            batch_size: 256,
            numeric_ids: true,
            agency: AgencyInfo::default(),
        }
    }
}
