//! interprets routing service responses. two shapes are understood:
//!
//! - the GeoJSON feature collection returned by the `/geojson` directions
//!   endpoint, with a `summary` under `features[0].properties`
//! - the legacy JSON shape with a `routes` array, whose first route carries an
//!   encoded polyline geometry and, in some service versions, a `summary`
//!
//! nothing here raises; an unusable response yields None.
use geo::{Coord, LineString};
use serde_json::Value;

use crate::model::RouteMetrics;

/// precision of encoded polylines returned by the routing service.
pub const POLYLINE_PRECISION: u32 = 5;

/// normalizes a routing response into minutes and kilometers.
pub fn extract_route_info(response: &Value) -> Option<RouteMetrics> {
    let summary = feature_properties(response)
        .and_then(|p| p.get("summary"))
        .or_else(|| first_route(response).and_then(|r| r.get("summary")))?;
    let seconds = summary.get("duration")?.as_f64()?;
    let meters = summary.get("distance")?.as_f64()?;
    RouteMetrics::from_seconds_and_meters(seconds, meters)
}

/// the route path as a [`LineString`] of (lon, lat) coordinates, if the
/// response carries one.
pub fn extract_route_geometry(response: &Value) -> Option<LineString<f64>> {
    if let Some(feature) = first_feature(response) {
        let geometry = feature.get("geometry")?;
        if geometry.get("type")?.as_str()? != "LineString" {
            return None;
        }
        let coords = geometry
            .get("coordinates")?
            .as_array()?
            .iter()
            .map(|pair| {
                let pair = pair.as_array()?;
                Some(Coord {
                    x: pair.first()?.as_f64()?,
                    y: pair.get(1)?.as_f64()?,
                })
            })
            .collect::<Option<Vec<_>>>()?;
        return Some(LineString::new(coords));
    }
    let encoded = first_route(response)?.get("geometry")?.as_str()?;
    match polyline::decode_polyline(encoded, POLYLINE_PRECISION) {
        Ok(line) => Some(line),
        Err(e) => {
            log::debug!("failed to decode route polyline: {e}");
            None
        }
    }
}

fn first_feature(response: &Value) -> Option<&Value> {
    response.get("features")?.as_array()?.first()
}

fn feature_properties(response: &Value) -> Option<&Value> {
    first_feature(response)?.get("properties")
}

fn first_route(response: &Value) -> Option<&Value> {
    response.get("routes")?.as_array()?.first()
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_feature_collection_summary() {
        let response = json!({
            "features": [{
                "properties": { "summary": { "duration": 5400.0, "distance": 120500.0 } },
                "geometry": { "type": "LineString", "coordinates": [[2.35, 48.85], [4.83, 45.76]] }
            }]
        });
        let metrics = extract_route_info(&response).expect("summary is present");
        assert_eq!(metrics.duration_minutes, 90.0);
        assert_eq!(metrics.distance_km, 120.5);
    }

    #[test]
    fn test_legacy_summary() {
        let response = json!({
            "routes": [{ "summary": { "duration": 600, "distance": 2000 }, "geometry": "_p~iF~ps|U" }]
        });
        let metrics = extract_route_info(&response).expect("summary is present");
        assert_eq!(metrics.duration_minutes, 10.0);
        assert_eq!(metrics.distance_km, 2.0);
    }

    #[test]
    fn test_unextractable_responses() {
        let legacy_without_timing = json!({ "routes": [{ "geometry": "_p~iF~ps|U" }] });
        let empty_features = json!({ "type": "FeatureCollection", "features": [] });
        let missing_distance = json!({
            "features": [{ "properties": { "summary": { "duration": 10.0 } } }]
        });
        let text_duration = json!({
            "features": [{ "properties": { "summary": { "duration": "ten", "distance": 4.0 } } }]
        });
        let negative = json!({
            "features": [{ "properties": { "summary": { "duration": -1.0, "distance": 4.0 } } }]
        });
        for response in [
            legacy_without_timing,
            empty_features,
            missing_distance,
            text_duration,
            negative,
            Value::Null,
        ] {
            assert!(extract_route_info(&response).is_none(), "{response}");
        }
    }

    #[test]
    fn test_feature_geometry() {
        let response = json!({
            "features": [{
                "properties": {},
                "geometry": { "type": "LineString", "coordinates": [[2.35, 48.85], [4.83, 45.76]] }
            }]
        });
        let line = extract_route_geometry(&response).expect("geometry is present");
        assert_eq!(line.0.len(), 2);
        assert_eq!(line.0[0], Coord { x: 2.35, y: 48.85 });
    }

    #[test]
    fn test_legacy_polyline_geometry() {
        // reference example from the encoded polyline algorithm documentation
        let response = json!({ "routes": [{ "geometry": "_p~iF~ps|U_ulLnnqC_mqNvxq`@" }] });
        let line = extract_route_geometry(&response).expect("geometry is present");
        assert_eq!(line.0.len(), 3);
        assert!((line.0[0].y - 38.5).abs() < 1e-9);
        assert!((line.0[0].x + 120.2).abs() < 1e-9);
    }

    #[test]
    fn test_missing_geometry() {
        assert!(extract_route_geometry(&json!({ "routes": [] })).is_none());
        assert!(extract_route_geometry(&json!({ "features": [{ "geometry": null }] })).is_none());
    }
}
