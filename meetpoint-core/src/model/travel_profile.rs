use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// travel mode passed through to the routing service. the search itself never
/// inspects it.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TravelProfile {
    #[default]
    DrivingCar,
    DrivingHgv,
    CyclingRegular,
    CyclingRoad,
    CyclingMountain,
    CyclingElectric,
    FootWalking,
    FootHiking,
    Wheelchair,
}

impl TravelProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelProfile::DrivingCar => "driving-car",
            TravelProfile::DrivingHgv => "driving-hgv",
            TravelProfile::CyclingRegular => "cycling-regular",
            TravelProfile::CyclingRoad => "cycling-road",
            TravelProfile::CyclingMountain => "cycling-mountain",
            TravelProfile::CyclingElectric => "cycling-electric",
            TravelProfile::FootWalking => "foot-walking",
            TravelProfile::FootHiking => "foot-hiking",
            TravelProfile::Wheelchair => "wheelchair",
        }
    }
}

impl std::fmt::Display for TravelProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
