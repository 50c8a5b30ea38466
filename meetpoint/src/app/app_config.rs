use std::path::Path;

use config::{Config, File};
use meetpoint_core::algorithm::selector::SearchConfig;
use serde::{Deserialize, Serialize};

use super::MeetPointAppError;
use crate::client::{NominatimConfig, OpenRouteServiceConfig};

/// top-level application configuration, read from a TOML file. every section
/// may be omitted.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct MeetPointAppConfig {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub routing: OpenRouteServiceConfig,
    #[serde(default)]
    pub geocoding: NominatimConfig,
}

impl MeetPointAppConfig {
    /// reads the configuration file, or the defaults if no file is provided.
    pub fn from_file(path: Option<&Path>) -> Result<MeetPointAppConfig, MeetPointAppError> {
        let Some(path) = path else {
            return Ok(MeetPointAppConfig::default());
        };
        let config = Config::builder()
            .add_source(File::from(path))
            .build()
            .map_err(|e| {
                let msg = format!("file '{}' produced error: {e}", path.display());
                MeetPointAppError::ConfigurationError(msg)
            })?;
        Self::try_from_config(config)
    }

    fn try_from_config(config: Config) -> Result<MeetPointAppConfig, MeetPointAppError> {
        config
            .try_deserialize::<MeetPointAppConfig>()
            .map_err(|e| MeetPointAppError::ConfigurationError(e.to_string()))
    }
}
