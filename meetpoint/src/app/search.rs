use std::path::Path;

use geo::LineString;
use meetpoint_core::{
    algorithm::{
        route_info,
        selector::{MeetingPointSelector, SearchConfig},
    },
    model::{ConstraintSpec, Coordinate, MeetPointError, TravelProfile, MIN_ORIGINS},
    service::{resolve_origins, Origin, RoutingClient},
};

use super::{MeetPointAppConfig, MeetPointAppError};
use crate::output::{self, MeetingReport};

/// runs a meeting point search from the command line, printing a summary and
/// writing the report, table and GeoJSON files to the output directory.
pub fn run(
    addresses: &[String],
    coordinates: &[Coordinate],
    profile: TravelProfile,
    constraint: ConstraintSpec,
    config: &MeetPointAppConfig,
    output_directory: &Path,
) -> Result<MeetingReport, MeetPointAppError> {
    let routing = config.routing.build()?;
    let (origins, unresolved) = collect_origins(addresses, coordinates, config)?;
    let (report, routes) = find_meeting_point(
        &routing,
        &origins,
        profile,
        &constraint,
        &config.search,
        unresolved,
    )?;

    for line in report.summary_lines() {
        println!("{line}");
    }

    output::create_dirs(output_directory)?;
    output::write_json(&report, output_directory)?;
    output::write_csv(&report, output_directory)?;
    if report.meeting_point.is_some() {
        output::write_geojson(&report, &routes, output_directory)?;
    }
    log::info!("wrote search outputs to '{}'", output_directory.display());
    Ok(report)
}

/// origins either come from geocoded addresses or directly from coordinates.
/// returns the origins along with any addresses that could not be resolved.
fn collect_origins(
    addresses: &[String],
    coordinates: &[Coordinate],
    config: &MeetPointAppConfig,
) -> Result<(Vec<Origin>, Vec<String>), MeetPointAppError> {
    if !addresses.is_empty() {
        let geocoder = config.geocoding.build()?;
        let resolved = resolve_origins(&geocoder, addresses)?;
        let unresolved = resolved.failures.into_iter().map(|(a, _)| a).collect();
        return Ok((resolved.origins, unresolved));
    }
    if coordinates.len() < MIN_ORIGINS {
        return Err(MeetPointError::InsufficientOrigins {
            required: MIN_ORIGINS,
            found: coordinates.len(),
        }
        .into());
    }
    let origins = coordinates
        .iter()
        .map(|c| Origin {
            address: c.to_string(),
            coordinate: *c,
        })
        .collect();
    Ok((origins, vec![]))
}

/// searches for the meeting point of these origins and, if one is found,
/// routes each origin to it for display. a failed route is left absent.
pub fn find_meeting_point(
    routing: &dyn RoutingClient,
    origins: &[Origin],
    profile: TravelProfile,
    constraint: &ConstraintSpec,
    search_config: &SearchConfig,
    unresolved: Vec<String>,
) -> Result<(MeetingReport, Vec<Option<LineString<f64>>>), MeetPointAppError> {
    let coordinates: Vec<Coordinate> = origins.iter().map(|o| o.coordinate).collect();
    let selector = MeetingPointSelector::new(routing, search_config.clone())?;
    let result = selector.search(&coordinates, profile, constraint)?;
    let report = MeetingReport::new(origins, &result, profile, constraint, unresolved);

    let routes = match report.meeting_point {
        Some(point) => origins
            .iter()
            .map(|origin| match routing.route(&origin.coordinate, &point, profile) {
                Ok(response) => route_info::extract_route_geometry(&response),
                Err(e) => {
                    log::debug!("no route from '{}' to meeting point: {e}", origin.address);
                    None
                }
            })
            .collect(),
        None => vec![],
    };
    Ok((report, routes))
}
