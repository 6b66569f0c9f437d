///! Coordinate extraction from the raw geolocation payload.

use super::types::Coordinates;
use crate::module::error::FetchError;

/// Parse the raw geolocation JSON into [`Coordinates`].
///
/// The payload carries many more fields (country, city, timezone, ...);
/// only the latitude/longitude pair is deserialized.
pub fn parse_coordinates(raw: &str) -> Result<Coordinates, FetchError> {
    serde_json::from_str(raw).map_err(|e| FetchError::Parse {
        what: "coordinates for IP",
        source: e,
    })
}
