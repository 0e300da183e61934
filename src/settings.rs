use config::{Config, Environment};
use serde::Deserialize;

use crate::error::Result;

/// Runtime settings, overridable through `CENSUS_*` environment variables
/// (e.g. `CENSUS_LODESTONE_URL=https://eu.finalfantasyxiv.com`).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub lodestone_url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub base_backoff_ms: u64,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("lodestone_url", "https://na.finalfantasyxiv.com")?
            .set_default("user_agent", concat!("census_gatherer/", env!("CARGO_PKG_VERSION")))?
            .set_default("request_timeout_secs", 15)?
            .set_default("max_retries", 3)?
            .set_default("base_backoff_ms", 2000)?
            .add_source(Environment::with_prefix("CENSUS"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lodestone_url: "https://na.finalfantasyxiv.com".to_string(),
            user_agent: concat!("census_gatherer/", env!("CARGO_PKG_VERSION")).to_string(),
            request_timeout_secs: 15,
            max_retries: 3,
            base_backoff_ms: 2000,
        }
    }
}
