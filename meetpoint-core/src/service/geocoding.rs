use serde::{Deserialize, Serialize};

use crate::model::{Coordinate, MeetPointError, MIN_ORIGINS};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeocodingFailure {
    #[error("could not geocode address '{0}'")]
    NotFound(String),
    #[error("geocoding service error: {0}")]
    ServiceError(String),
    #[error("failure connecting to geocoding service: {0}")]
    ConnectionError(String),
}

/// converts free-text addresses to coordinates.
pub trait Geocoder {
    fn geocode(&self, address: &str) -> Result<Coordinate, GeocodingFailure>;
}

/// an address and the coordinate it resolved to.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Origin {
    pub address: String,
    pub coordinate: Coordinate,
}

#[derive(Clone, Debug, Default)]
pub struct ResolvedOrigins {
    /// resolved origins, in the order the addresses were provided
    pub origins: Vec<Origin>,
    pub failures: Vec<(String, GeocodingFailure)>,
}

/// geocodes each address in order. a failed address is reported and skipped;
/// the search may proceed as long as at least two addresses resolve.
pub fn resolve_origins<S: AsRef<str>>(
    geocoder: &dyn Geocoder,
    addresses: &[S],
) -> Result<ResolvedOrigins, MeetPointError> {
    let mut resolved = ResolvedOrigins::default();
    for address in addresses {
        let address: &str = address.as_ref();
        if address.trim().is_empty() {
            return Err(MeetPointError::InvalidUserInput(String::from(
                "address cannot be blank",
            )));
        }
        match geocoder.geocode(address) {
            Ok(coordinate) => {
                log::debug!("geocoded '{address}' to ({coordinate})");
                resolved.origins.push(Origin {
                    address: address.to_string(),
                    coordinate,
                });
            }
            Err(e) => {
                log::warn!("{e}");
                resolved.failures.push((address.to_string(), e));
            }
        }
    }
    if resolved.origins.len() < MIN_ORIGINS {
        return Err(MeetPointError::InsufficientOrigins {
            required: MIN_ORIGINS,
            found: resolved.origins.len(),
        });
    }
    Ok(resolved)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    struct LookupGeocoder(HashMap<&'static str, Coordinate>);

    impl Geocoder for LookupGeocoder {
        fn geocode(&self, address: &str) -> Result<Coordinate, GeocodingFailure> {
            self.0
                .get(address)
                .copied()
                .ok_or_else(|| GeocodingFailure::NotFound(address.to_string()))
        }
    }

    fn geocoder() -> LookupGeocoder {
        LookupGeocoder(HashMap::from([
            ("paris", Coordinate::new(48.8566, 2.3522)),
            ("lyon", Coordinate::new(45.764, 4.8357)),
        ]))
    }

    #[test]
    fn test_skips_unresolvable_address() {
        let result = resolve_origins(&geocoder(), &["paris", "atlantis", "lyon"])
            .expect("two addresses should resolve");
        assert_eq!(result.origins.len(), 2);
        assert_eq!(result.origins[0].address, "paris");
        assert_eq!(result.origins[1].address, "lyon");
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].0, "atlantis");
    }

    #[test]
    fn test_requires_two_origins() {
        let result = resolve_origins(&geocoder(), &["paris", "atlantis"]);
        assert!(matches!(
            result,
            Err(MeetPointError::InsufficientOrigins { found: 1, .. })
        ));
    }

    #[test]
    fn test_blank_address_is_invalid() {
        let result = resolve_origins(&geocoder(), &["paris", "  ", "lyon"]);
        assert!(matches!(result, Err(MeetPointError::InvalidUserInput(_))));
    }
}
