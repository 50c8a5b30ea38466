use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::NominatimGeocoder;
use crate::app::MeetPointAppError;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NominatimConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Nominatim's usage policy requires an identifying user agent
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    String::from("https://nominatim.openstreetmap.org")
}

fn default_user_agent() -> String {
    String::from("meetpoint")
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl NominatimConfig {
    pub fn build(&self) -> Result<NominatimGeocoder, MeetPointAppError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(self.user_agent.as_str())
            .timeout(Duration::from_secs(self.request_timeout_secs))
            .build()
            .map_err(|e| MeetPointAppError::HttpClientError(e.to_string()))?;
        Ok(NominatimGeocoder::new(client, &self.base_url))
    }
}
