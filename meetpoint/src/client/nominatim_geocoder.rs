use meetpoint_core::{
    model::Coordinate,
    service::{Geocoder, GeocodingFailure},
};
use serde::Deserialize;

/// blocking geocoder backed by the Nominatim search API.
pub struct NominatimGeocoder {
    client: reqwest::blocking::Client,
    base_url: String,
}

/// a search result row. Nominatim reports coordinates as strings.
#[derive(Deserialize, Debug)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

impl NominatimGeocoder {
    pub fn new(client: reqwest::blocking::Client, base_url: &str) -> NominatimGeocoder {
        NominatimGeocoder {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Geocoder for NominatimGeocoder {
    fn geocode(&self, address: &str) -> Result<Coordinate, GeocodingFailure> {
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .send()
            .map_err(|e| GeocodingFailure::ConnectionError(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodingFailure::ServiceError(format!(
                "status {status} geocoding '{address}'"
            )));
        }
        let places = response
            .json::<Vec<NominatimPlace>>()
            .map_err(|e| GeocodingFailure::ServiceError(format!("invalid response body: {e}")))?;
        first_coordinate(address, &places)
    }
}

fn first_coordinate(
    address: &str,
    places: &[NominatimPlace],
) -> Result<Coordinate, GeocodingFailure> {
    let place = places
        .first()
        .ok_or_else(|| GeocodingFailure::NotFound(address.to_string()))?;
    let parse = |v: &str| {
        v.parse::<f64>().map_err(|e| {
            GeocodingFailure::ServiceError(format!("invalid coordinate value '{v}': {e}"))
        })
    };
    let coordinate = Coordinate::new(parse(&place.lat)?, parse(&place.lon)?);
    coordinate
        .validate()
        .map_err(|e| GeocodingFailure::ServiceError(e.to_string()))?;
    if let Some(name) = &place.display_name {
        log::debug!("'{address}' matched '{name}'");
    }
    Ok(coordinate)
}
