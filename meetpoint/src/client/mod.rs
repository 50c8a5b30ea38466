mod nominatim_config;
mod nominatim_geocoder;
mod openroute_client;
mod openroute_config;

pub use nominatim_config::NominatimConfig;
pub use nominatim_geocoder::NominatimGeocoder;
pub use openroute_client::OpenRouteServiceClient;
pub use openroute_config::{OpenRouteServiceConfig, API_KEY_ENV_VAR};
