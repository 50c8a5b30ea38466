use serde::{Deserialize, Serialize};

use crate::model::MeetPointError;

/// policy values controlling the shape and resolution of the candidate lattice.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// number of lattice values along each axis. the lattice has grid_size² points.
    #[serde(default = "default_grid_size")]
    pub grid_size: usize,
    /// span in degrees (≈ 300 km at the default) beyond which the search region
    /// is shrunk around the centroid instead of expanded from the bounding box.
    #[serde(default = "default_wide_spread_threshold")]
    pub wide_spread_threshold: f64,
    /// half-width of a wide-spread region as a fraction of the smaller axis span.
    #[serde(default = "default_shrink_factor")]
    pub shrink_factor: f64,
    /// outward padding of each local-mode axis as a fraction of its own span.
    #[serde(default = "default_expansion_ratio")]
    pub expansion_ratio: f64,
    /// half-width in degrees used wherever a span collapses to zero.
    #[serde(default = "default_min_half_width")]
    pub min_half_width: f64,
}

fn default_grid_size() -> usize {
    10
}

fn default_wide_spread_threshold() -> f64 {
    3.0
}

fn default_shrink_factor() -> f64 {
    0.3
}

fn default_expansion_ratio() -> f64 {
    0.1
}

fn default_min_half_width() -> f64 {
    0.01
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            wide_spread_threshold: default_wide_spread_threshold(),
            shrink_factor: default_shrink_factor(),
            expansion_ratio: default_expansion_ratio(),
            min_half_width: default_min_half_width(),
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<(), MeetPointError> {
        let positive = |name: &str, v: f64| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(MeetPointError::InvalidConfiguration(format!(
                    "{name} must be a positive number, found {v}"
                )))
            }
        };
        if self.grid_size == 0 {
            return Err(MeetPointError::InvalidConfiguration(String::from(
                "grid_size must be at least 1",
            )));
        }
        positive("wide_spread_threshold", self.wide_spread_threshold)?;
        positive("shrink_factor", self.shrink_factor)?;
        positive("min_half_width", self.min_half_width)?;
        if !self.expansion_ratio.is_finite() || self.expansion_ratio < 0.0 {
            return Err(MeetPointError::InvalidConfiguration(format!(
                "expansion_ratio must be non-negative, found {}",
                self.expansion_ratio
            )));
        }
        Ok(())
    }
}
