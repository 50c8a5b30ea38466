use crate::model::Coordinate;

use super::SearchRegion;

/// the lattice of candidate meeting points, stored in row-major order: every
/// longitude for the first latitude, then the next latitude.
#[derive(Clone, Debug)]
pub struct CandidateGrid {
    pub region: SearchRegion,
    pub grid_size: usize,
    points: Vec<Coordinate>,
}

impl CandidateGrid {
    pub fn new(region: SearchRegion, grid_size: usize) -> CandidateGrid {
        let lat_steps = linspace(region.lat_min, region.lat_max, grid_size);
        let lon_steps = linspace(region.lon_min, region.lon_max, grid_size);
        let points = lat_steps
            .iter()
            .flat_map(|lat| lon_steps.iter().map(|lon| Coordinate::new(*lat, *lon)))
            .collect();
        CandidateGrid {
            region,
            grid_size,
            points,
        }
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Coordinate> {
        self.points.get(index)
    }
}

/// `n` evenly spaced values over [start, end], inclusive of both endpoints.
/// a single value collapses to `start`.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}
