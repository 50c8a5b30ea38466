use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::algorithm::grid::GridConfig;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SearchConfig {
    #[serde(default)]
    pub grid: GridConfig,
    /// upper bound on the whole search, in seconds. when it elapses the search
    /// stops as if rate limited and returns the best result found so far.
    #[serde(default)]
    pub search_timeout_secs: Option<u64>,
    /// display a progress bar while evaluating the lattice.
    #[serde(default = "default_show_progress")]
    pub show_progress: bool,
}

fn default_show_progress() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            search_timeout_secs: None,
            show_progress: default_show_progress(),
        }
    }
}

impl SearchConfig {
    pub fn search_timeout(&self) -> Option<Duration> {
        self.search_timeout_secs.map(Duration::from_secs)
    }
}
