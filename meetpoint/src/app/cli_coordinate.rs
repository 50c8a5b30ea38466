use meetpoint_core::model::Coordinate;

/// parses a "lat,lon" command line argument.
pub fn parse_coordinate(s: &str) -> Result<Coordinate, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [lat, lon] = parts.as_slice() else {
        return Err(format!(
            "expected coordinate in the format 'lat,lon', found '{s}'"
        ));
    };
    let lat = lat
        .parse::<f64>()
        .map_err(|e| format!("invalid latitude '{lat}': {e}"))?;
    let lon = lon
        .parse::<f64>()
        .map_err(|e| format!("invalid longitude '{lon}': {e}"))?;
    let coordinate = Coordinate::new(lat, lon);
    coordinate.validate().map_err(|e| e.to_string())?;
    Ok(coordinate)
}
