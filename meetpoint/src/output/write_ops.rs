use std::{fs::File, path::Path};

use geo::LineString;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde::Serialize;
use serde_json::json;

use super::MeetingReport;
use crate::app::MeetPointAppError;

pub const REPORT_FILENAME: &str = "meeting_point.json";
pub const GEOJSON_FILENAME: &str = "meeting_point.geojson";
pub const CSV_FILENAME: &str = "meeting_point.csv";

/// helper function to "mkdir -p path" - make all directories along a path
pub fn create_dirs<P>(path: P) -> Result<(), MeetPointAppError>
where
    P: AsRef<Path>,
{
    let dirspath = path.as_ref();
    if dirspath.as_os_str().is_empty() || dirspath.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(dirspath).map_err(|e| MeetPointAppError::WriteError {
        path: dirspath.to_owned(),
        message: format!("error building output directory: {e}"),
    })
}

/// writes the full report as pretty-printed JSON.
pub fn write_json(report: &MeetingReport, output_directory: &Path) -> Result<(), MeetPointAppError> {
    write_serialized(report, &output_directory.join(REPORT_FILENAME))
}

/// writes the per-origin table, one row per origin.
pub fn write_csv(report: &MeetingReport, output_directory: &Path) -> Result<(), MeetPointAppError> {
    let filepath = output_directory.join(CSV_FILENAME);
    let write_error = |message: String| MeetPointAppError::WriteError {
        path: filepath.clone(),
        message,
    };
    let mut writer = csv::Writer::from_path(&filepath).map_err(|e| write_error(e.to_string()))?;
    for row in report.origins.iter() {
        writer
            .serialize(row)
            .map_err(|e| write_error(format!("failed to write row: {e}")))?;
    }
    writer.flush().map_err(|e| write_error(e.to_string()))
}

/// writes origins, the meeting point and the route from each origin as a
/// GeoJSON feature collection. `routes` is aligned with the report origins.
pub fn write_geojson(
    report: &MeetingReport,
    routes: &[Option<LineString<f64>>],
    output_directory: &Path,
) -> Result<(), MeetPointAppError> {
    let collection = to_feature_collection(report, routes);
    write_serialized(&collection, &output_directory.join(GEOJSON_FILENAME))
}

pub fn to_feature_collection(
    report: &MeetingReport,
    routes: &[Option<LineString<f64>>],
) -> FeatureCollection {
    let mut features = vec![];
    for (idx, origin) in report.origins.iter().enumerate() {
        features.push(feature(
            Value::Point(vec![origin.lon, origin.lat]),
            json!({
                "role": "origin",
                "index": idx,
                "address": origin.address,
                "duration_minutes": origin.duration_minutes,
                "distance_km": origin.distance_km,
            }),
        ));
    }
    if let Some(point) = report.meeting_point {
        features.push(feature(
            Value::Point(vec![point.lon, point.lat]),
            json!({
                "role": "meeting_point",
                "status": report.status,
                "max_duration_minutes": report.max_duration_minutes,
                "max_distance_km": report.max_distance_km,
            }),
        ));
    }
    for (idx, route) in routes.iter().enumerate() {
        let Some(line) = route else {
            continue;
        };
        let address = report.origins.get(idx).map(|o| o.address.clone());
        features.push(feature(
            Value::LineString(line.coords().map(|c| vec![c.x, c.y]).collect()),
            json!({ "role": "route", "index": idx, "address": address }),
        ));
    }
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn feature(value: Value, properties: serde_json::Value) -> Feature {
    let properties: Option<JsonObject> = match properties {
        serde_json::Value::Object(map) => Some(map),
        _ => None,
    };
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties,
        foreign_members: None,
    }
}

fn write_serialized<T: Serialize>(value: &T, filepath: &Path) -> Result<(), MeetPointAppError> {
    let file = File::create(filepath).map_err(|e| MeetPointAppError::WriteError {
        path: filepath.to_owned(),
        message: e.to_string(),
    })?;
    serde_json::to_writer_pretty(file, value)
        .map_err(|e| MeetPointAppError::SerializationError(format!("{}: {e}", filepath.display())))
}
