mod app_config;
mod app_error;
mod cli_coordinate;
mod meetpoint_app;

pub mod grid_preview;
pub mod search;

pub use app_config::MeetPointAppConfig;
pub use app_error::MeetPointAppError;
pub use cli_coordinate::parse_coordinate;
pub use meetpoint_app::{MeetPointApp, MeetPointOperation};
