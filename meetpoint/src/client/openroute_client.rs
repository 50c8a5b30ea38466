use meetpoint_core::{
    model::{Coordinate, TravelProfile},
    service::{RouteResponse, RoutingClient, RoutingFailure},
};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Serialize;

/// blocking client for the OpenRouteService v2 directions API, requesting
/// GeoJSON responses.
pub struct OpenRouteServiceClient {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

/// directions request body. coordinates are [lon, lat] pairs.
#[derive(Serialize, Debug, PartialEq)]
struct DirectionsRequest {
    coordinates: Vec<[f64; 2]>,
}

impl DirectionsRequest {
    fn new(origin: &Coordinate, destination: &Coordinate) -> DirectionsRequest {
        DirectionsRequest {
            coordinates: vec![origin.to_lon_lat(), destination.to_lon_lat()],
        }
    }
}

impl OpenRouteServiceClient {
    pub fn new(
        client: reqwest::blocking::Client,
        base_url: &str,
        api_key: String,
    ) -> OpenRouteServiceClient {
        OpenRouteServiceClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn directions_url(&self, profile: TravelProfile) -> String {
        format!("{}/v2/directions/{profile}/geojson", self.base_url)
    }
}

impl RoutingClient for OpenRouteServiceClient {
    fn route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        profile: TravelProfile,
    ) -> Result<RouteResponse, RoutingFailure> {
        let response = self
            .client
            .post(self.directions_url(profile))
            .header(ACCEPT, "application/json, application/geo+json")
            .header(AUTHORIZATION, self.api_key.as_str())
            .json(&DirectionsRequest::new(origin, destination))
            .send()
            .map_err(|e| RoutingFailure::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(RoutingFailure::from_status(status.as_u16(), text));
        }
        response
            .json::<RouteResponse>()
            .map_err(|e| RoutingFailure::ServiceError {
                status: status.as_u16(),
                message: format!("invalid response body: {e}"),
            })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_request_uses_lon_lat_order() {
        let request = DirectionsRequest::new(
            &Coordinate::new(48.8566, 2.3522),
            &Coordinate::new(45.764, 4.8357),
        );
        let json = serde_json::to_value(&request).expect("request serializes");
        assert_eq!(
            json,
            serde_json::json!({ "coordinates": [[2.3522, 48.8566], [4.8357, 45.764]] })
        );
    }

    #[test]
    fn test_directions_url() {
        let client = OpenRouteServiceClient::new(
            reqwest::blocking::Client::new(),
            "https://api.openrouteservice.org/",
            String::from("key"),
        );
        assert_eq!(
            client.directions_url(TravelProfile::CyclingElectric),
            "https://api.openrouteservice.org/v2/directions/cycling-electric/geojson"
        );
    }
}
