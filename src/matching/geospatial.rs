// src/matching/geospatial.rs - Great-circle distance and proximity scoring
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Haversine great-circle distance in meters between two `(lat, lon)` pairs
/// given in degrees. Inputs are not range-validated; out-of-range values
/// degrade the score, they never error (validation is the import layer's
/// job).
pub fn haversine_distance_meters(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (lat1, lon1) = a;
    let (lat2, lon2) = b;
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * h.sqrt().asin()
}

/// Maps distance to a [0,1] proximity score with linear decay:
/// `max(0, 1 - distance / max_distance_meters)`. Distances at or beyond the
/// cutoff score 0. Linear on purpose, so the contribution stays auditable.
pub fn proximity_score(a: (f64, f64), b: (f64, f64), max_distance_meters: f64) -> f64 {
    if max_distance_meters <= 0.0 {
        return 0.0;
    }
    let distance = haversine_distance_meters(a, b);
    (1.0 - distance / max_distance_meters).max(0.0)
}
