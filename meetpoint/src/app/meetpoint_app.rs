use std::path::Path;

use clap::{Parser, Subcommand};
use meetpoint_core::model::{ConstraintKind, ConstraintSpec, Coordinate, TravelProfile};

use super::{grid_preview, parse_coordinate, search, MeetPointAppConfig, MeetPointAppError};

/// Command line tool to find the ideal meeting point between several addresses
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct MeetPointApp {
    #[command(subcommand)]
    pub op: MeetPointOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum MeetPointOperation {
    /// find the meeting point minimizing the longest trip from any origin
    Search {
        /// an origin address, geocoded before the search. repeat for each origin.
        #[arg(short, long)]
        address: Vec<String>,

        /// an origin as "lat,lon", used instead of addresses. repeat for each origin.
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values(true), conflicts_with = "address")]
        coordinate: Vec<Coordinate>,

        /// travel mode used for every route
        #[arg(short, long, value_enum, default_value_t = TravelProfile::DrivingCar)]
        profile: TravelProfile,

        /// quantity limited by the maximum and minimized by the search
        #[arg(long, value_enum, default_value_t = ConstraintKind::Time)]
        constraint: ConstraintKind,

        /// maximum travel time (minutes) or distance (kilometers) from any origin
        #[arg(short, long)]
        max_value: f64,

        /// TOML file with search, routing and geocoding settings
        #[arg(short, long)]
        configuration_file: Option<String>,

        /// location on disk to write output files. if not provided,
        /// use the current working directory.
        #[arg(short, long)]
        output_directory: Option<String>,
    },
    /// print the candidate lattice a search over these origins would evaluate,
    /// without calling the routing service
    Grid {
        /// an origin as "lat,lon". repeat for each origin.
        #[arg(long, value_parser = parse_coordinate, allow_hyphen_values(true), required = true)]
        coordinate: Vec<Coordinate>,

        /// TOML file with search settings
        #[arg(short, long)]
        configuration_file: Option<String>,
    },
}

impl MeetPointOperation {
    pub fn run(&self) -> Result<(), MeetPointAppError> {
        match self {
            MeetPointOperation::Search {
                address,
                coordinate,
                profile,
                constraint,
                max_value,
                configuration_file,
                output_directory,
            } => {
                let config =
                    MeetPointAppConfig::from_file(configuration_file.as_deref().map(Path::new))?;
                let constraint = ConstraintSpec::new(*constraint, *max_value)?;
                let outdir = match output_directory {
                    Some(out) => Path::new(out),
                    None => Path::new(""),
                };
                search::run(address, coordinate, *profile, constraint, &config, outdir)?;
                Ok(())
            }
            MeetPointOperation::Grid {
                coordinate,
                configuration_file,
            } => {
                let config =
                    MeetPointAppConfig::from_file(configuration_file.as_deref().map(Path::new))?;
                grid_preview::run(coordinate, &config.search)?;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        MeetPointApp::command().debug_assert();
    }

    #[test]
    fn test_parse_search_arguments() {
        let app = MeetPointApp::try_parse_from([
            "meetpoint",
            "search",
            "--coordinate",
            "48.8566,2.3522",
            "--coordinate",
            "45.764,-4.8357",
            "--profile",
            "cycling-road",
            "--constraint",
            "distance",
            "--max-value",
            "150",
        ])
        .expect("arguments should parse");
        match app.op {
            MeetPointOperation::Search {
                coordinate,
                profile,
                constraint,
                max_value,
                ..
            } => {
                assert_eq!(coordinate.len(), 2);
                assert_eq!(coordinate[1].lon, -4.8357);
                assert_eq!(profile, TravelProfile::CyclingRoad);
                assert_eq!(constraint, ConstraintKind::Distance);
                assert_eq!(max_value, 150.0);
            }
            _ => panic!("expected search operation"),
        }
    }

    #[test]
    fn test_addresses_conflict_with_coordinates() {
        let result = MeetPointApp::try_parse_from([
            "meetpoint",
            "search",
            "--address",
            "Paris",
            "--coordinate",
            "45.764,4.8357",
            "--max-value",
            "60",
        ]);
        assert!(result.is_err());
    }
}
