mod geocoding;
mod routing;

#[cfg(test)]
pub(crate) mod test_routing;

pub use geocoding::{resolve_origins, Geocoder, GeocodingFailure, Origin, ResolvedOrigins};
pub use routing::{RouteResponse, RoutingClient, RoutingFailure};
