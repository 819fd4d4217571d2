use std::time::Duration;

use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;

use crate::core::state::{DEFAULT_SUBMIT_DELAY_MS, SCROLL_THRESHOLD};

/// Environment variable prefix for every setting
pub const ENV_PREFIX: &str = "PORTFOLIO_";

/// Runtime settings for the site
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    /// Prefix prepended to thumbnail and figure paths
    #[serde(default)]
    pub asset_root: String,

    /// Delay of the simulated contact relay, in milliseconds
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,

    /// Scroll offset that raises the navigation bar
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: f64,
}

fn default_submit_delay_ms() -> u64 {
    DEFAULT_SUBMIT_DELAY_MS
}

fn default_scroll_threshold() -> f64 {
    SCROLL_THRESHOLD
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            asset_root: String::new(),
            submit_delay_ms: default_submit_delay_ms(),
            scroll_threshold: default_scroll_threshold(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from `PORTFOLIO_*` environment variables, reading
    /// a `.env` file first if one exists.
    pub fn load() -> Result<Self> {
        dotenv().ok();
        let config = envy::prefixed(ENV_PREFIX).from_env::<SiteConfig>()?;
        Ok(config)
    }

    /// Same as [`SiteConfig::load`] but from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::prefixed(ENV_PREFIX).from_iter::<_, SiteConfig>(vars)?;
        Ok(config)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// Resolve an asset path against the configured root. Absolute URLs pass
    /// through untouched.
    pub fn asset_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let root = self.asset_root.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{root}{path}")
        } else {
            format!("{root}/{path}")
        }
    }
}
