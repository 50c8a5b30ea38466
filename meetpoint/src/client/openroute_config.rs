use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::OpenRouteServiceClient;
use crate::app::MeetPointAppError;

/// environment variable consulted when no API key is configured.
pub const API_KEY_ENV_VAR: &str = "OPENROUTE_API_KEY";

/// Serializable configuration for the OpenRouteService directions API.
/// Builds to a [`OpenRouteServiceClient`]
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OpenRouteServiceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// if not provided, read from the OPENROUTE_API_KEY environment variable
    #[serde(default)]
    pub api_key: Option<String>,
    /// hard timeout applied to every routing call
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    String::from("https://api.openrouteservice.org")
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for OpenRouteServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl OpenRouteServiceConfig {
    pub fn build(&self) -> Result<OpenRouteServiceClient, MeetPointAppError> {
        let api_key = resolve_api_key(
            self.api_key.as_deref(),
            std::env::var(API_KEY_ENV_VAR).ok().as_deref(),
        )?;
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(self.request_timeout_secs))
            .build()
            .map_err(|e| MeetPointAppError::HttpClientError(e.to_string()))?;
        Ok(OpenRouteServiceClient::new(client, &self.base_url, api_key))
    }
}

/// the configured key wins over the environment. blank keys are ignored.
fn resolve_api_key(
    configured: Option<&str>,
    environment: Option<&str>,
) -> Result<String, MeetPointAppError> {
    configured
        .into_iter()
        .chain(environment)
        .map(str::trim)
        .find(|key| !key.is_empty())
        .map(String::from)
        .ok_or(MeetPointAppError::MissingApiKey(API_KEY_ENV_VAR))
}
