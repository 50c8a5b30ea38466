mod candidate_grid;
mod grid_builder;
mod grid_config;
mod search_region;

pub use candidate_grid::CandidateGrid;
pub use grid_builder::GridBuilder;
pub use grid_config::GridConfig;
pub use search_region::{GridMode, SearchRegion};
