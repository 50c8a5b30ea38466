use geo::{BoundingRect, Centroid, MultiPoint, Point};

use crate::model::{Coordinate, MeetPointError, MIN_ORIGINS};

use super::{CandidateGrid, GridConfig, GridMode, SearchRegion};

/// derives the search region and candidate lattice from a set of origins.
#[derive(Clone, Debug)]
pub struct GridBuilder {
    config: GridConfig,
}

impl GridBuilder {
    pub fn new(config: GridConfig) -> Result<GridBuilder, MeetPointError> {
        config.validate()?;
        Ok(GridBuilder { config })
    }

    /// builds the grid_size² candidate lattice covering the search region of
    /// these origins.
    pub fn build(&self, origins: &[Coordinate]) -> Result<CandidateGrid, MeetPointError> {
        let region = self.search_region(origins)?;
        let grid = CandidateGrid::new(region, self.config.grid_size);
        log::debug!(
            "built {} grid with {} candidates over lat [{:.5}, {:.5}], lon [{:.5}, {:.5}]",
            region.mode,
            grid.len(),
            region.lat_min,
            region.lat_max,
            region.lon_min,
            region.lon_max
        );
        Ok(grid)
    }

    /// computes the region to search.
    ///
    /// when the origins span more than the wide-spread threshold on either
    /// axis, the region is a square centered on the origin centroid with a
    /// half-width of shrink_factor × the smaller axis span. otherwise it is
    /// the bounding box of the origins padded on each axis by expansion_ratio
    /// of that axis' span. any span that collapses to zero is replaced by
    /// min_half_width.
    pub fn search_region(&self, origins: &[Coordinate]) -> Result<SearchRegion, MeetPointError> {
        if origins.len() < MIN_ORIGINS {
            return Err(MeetPointError::InsufficientOrigins {
                required: MIN_ORIGINS,
                found: origins.len(),
            });
        }
        for origin in origins.iter() {
            origin.validate()?;
        }

        let multipoint: MultiPoint<f64> = origins.iter().map(|c| Point::from(*c)).collect();
        let bounds = multipoint.bounding_rect().ok_or_else(|| {
            MeetPointError::InternalError(String::from("origins have no bounding box"))
        })?;
        let centroid = multipoint.centroid().ok_or_else(|| {
            MeetPointError::InternalError(String::from("origins have no centroid"))
        })?;

        let lat_span = bounds.height();
        let lon_span = bounds.width();
        let span = lat_span.max(lon_span);
        let min_half_width = self.config.min_half_width;

        let region = if span > self.config.wide_spread_threshold {
            let half_width = match self.config.shrink_factor * lat_span.min(lon_span) {
                h if h > 0.0 => h,
                _ => min_half_width,
            };
            SearchRegion {
                lat_min: centroid.y() - half_width,
                lat_max: centroid.y() + half_width,
                lon_min: centroid.x() - half_width,
                lon_max: centroid.x() + half_width,
                mode: GridMode::WideSpread,
            }
        } else {
            let pad = |axis_span: f64| {
                if axis_span > 0.0 {
                    axis_span * self.config.expansion_ratio
                } else {
                    min_half_width
                }
            };
            let (lat_pad, lon_pad) = (pad(lat_span), pad(lon_span));
            SearchRegion {
                lat_min: bounds.min().y - lat_pad,
                lat_max: bounds.max().y + lat_pad,
                lon_min: bounds.min().x - lon_pad,
                lon_max: bounds.max().x + lon_pad,
                mode: GridMode::Local,
            }
        };
        Ok(clamp_to_globe(region))
    }
}

fn clamp_to_globe(region: SearchRegion) -> SearchRegion {
    SearchRegion {
        lat_min: region.lat_min.max(-90.0),
        lat_max: region.lat_max.min(90.0),
        lon_min: region.lon_min.max(-180.0),
        lon_max: region.lon_max.min(180.0),
        mode: region.mode,
    }
}
