use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;
use tracing::warn;

use crate::models::kind::ChannelKind;

const ENV_PREFIX: &str = "NOTIFIER_";

#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub log_json: bool,

    #[serde(default = "default_filter_kinds")]
    pub filter_kinds: Vec<ChannelKind>,

    #[serde(default)]
    pub validate_destinations: bool,
}

fn default_filter_kinds() -> Vec<ChannelKind> {
    vec![ChannelKind::Email]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_json: false,
            filter_kinds: default_filter_kinds(),
            validate_destinations: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::prefixed(ENV_PREFIX)
            .from_env::<Self>()
            .map_err(|e| anyhow!("Invalid notifier environment variable: {}", e))?;
        Ok(config)
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::prefixed(ENV_PREFIX)
            .from_iter::<_, Self>(vars)
            .map_err(|e| anyhow!("Invalid notifier environment variable: {}", e))?;
        Ok(config)
    }

    pub fn or_default(result: Result<Self, Error>) -> Self {
        match result {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Falling back to default configuration");
                Self::default()
            }
        }
    }
}
