use crate::models::{BoundingBox, Coordinate};

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `origin` - First point in degrees
/// * `target` - Second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(origin: Coordinate, target: Coordinate) -> f64 {
    let lat1_rad = origin.latitude.to_radians();
    let lat2_rad = target.latitude.to_radians();
    let delta_lat = (target.latitude - origin.latitude).to_radians();
    let delta_lon = (target.longitude - origin.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Calculate a bounding box around a center point
///
/// Used to scope the Overpass query to the requester's surroundings.
/// 1° latitude ≈ 111km, 1° longitude ≈ 111km * cos(latitude)
///
/// # Arguments
/// * `center` - Center point in degrees
/// * `radius_km` - Radius in kilometers
///
/// # Returns
/// BoundingBox with min/max lat/lon
pub fn bounding_box(center: Coordinate, radius_km: f64) -> BoundingBox {
    // 1 degree latitude is approximately 111 km
    let lat_delta = radius_km / 111.0;

    // 1 degree longitude varies by latitude
    let lon_delta = radius_km / (111.0 * center.latitude.to_radians().cos().abs());

    BoundingBox {
        min_lat: center.latitude - lat_delta,
        max_lat: center.latitude + lat_delta,
        min_lon: center.longitude - lon_delta,
        max_lon: center.longitude + lon_delta,
    }
}
