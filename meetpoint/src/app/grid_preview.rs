use meetpoint_core::{
    algorithm::{
        grid::{CandidateGrid, GridBuilder},
        selector::SearchConfig,
    },
    model::Coordinate,
};

use super::MeetPointAppError;

/// prints the lattice a search over these origins would evaluate, along with
/// the worst-case number of routing calls it could cost.
pub fn run(
    origins: &[Coordinate],
    config: &SearchConfig,
) -> Result<CandidateGrid, MeetPointAppError> {
    let grid = GridBuilder::new(config.grid.clone())?.build(origins)?;
    let region = grid.region;
    println!(
        "{} region lat [{:.6}, {:.6}] lon [{:.6}, {:.6}]",
        region.mode, region.lat_min, region.lat_max, region.lon_min, region.lon_max
    );
    println!(
        "{} candidates, at most {} routing calls",
        grid.len(),
        grid.len() * origins.len()
    );
    for point in grid.points() {
        println!("{},{}", point.lat, point.lon);
    }
    Ok(grid)
}

#[cfg(test)]
mod test {
    use super::*;
    use meetpoint_core::algorithm::grid::GridMode;

    #[test]
    fn test_preview_uses_configured_grid() {
        let mut config = SearchConfig::default();
        config.grid.grid_size = 3;
        let origins = vec![Coordinate::new(48.85, 2.35), Coordinate::new(48.80, 2.30)];
        let grid = run(&origins, &config).expect("grid should build");
        assert_eq!(grid.len(), 9);
        assert_eq!(grid.region.mode, GridMode::Local);
    }
}
