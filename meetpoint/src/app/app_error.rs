use std::path::PathBuf;

use meetpoint_core::model::MeetPointError;

#[derive(thiserror::Error, Debug)]
pub enum MeetPointAppError {
    #[error("Invalid input: {0}")]
    InvalidUserInput(String),
    #[error("failure reading configuration: {0}")]
    ConfigurationError(String),
    #[error("missing OpenRouteService API key, set routing.api_key in the configuration file or the {0} environment variable")]
    MissingApiKey(&'static str),
    #[error("failure building HTTP client: {0}")]
    HttpClientError(String),
    #[error(transparent)]
    SearchError(#[from] MeetPointError),
    #[error("Error writing to '{path}': {message}")]
    WriteError { path: PathBuf, message: String },
    #[error("Serializing output failed: {0}")]
    SerializationError(String),
}
