//! Spherical geometry: unit conversions, great-circle distance and the
//! bounding box that encloses a circle on the sphere.
//!
//! Every function here is pure. Coordinates are `geo::Point<f64>` with `x` as
//! longitude and `y` as latitude, in degrees.

use crate::error::{GeoNearError, Result};
use geo::Point;
use geonear_types::BoundingBox;
use std::f64::consts::PI;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.01;

/// Longitude of the antimeridian, west side.
const MIN_LON: f64 = -180.0;
/// Longitude of the antimeridian, east side.
const MAX_LON: f64 = 180.0;

/// Convert degrees to radians.
pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Convert radians to degrees.
pub fn to_degrees(radians: f64) -> f64 {
    180.0 * radians / PI
}

/// Angle subtended at the centre of the Earth by an arc of `distance_km`.
pub fn angular_distance(distance_km: f64) -> f64 {
    distance_km / EARTH_RADIUS_KM
}

/// Reject coordinates whose longitude or latitude is NaN or infinite.
///
/// Range is not checked: out-of-range values are carried through as given.
pub fn validate_coordinate(point: &Point<f64>) -> Result<()> {
    if !point.x().is_finite() {
        return Err(GeoNearError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            point.x()
        )));
    }
    if !point.y().is_finite() {
        return Err(GeoNearError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            point.y()
        )));
    }
    Ok(())
}

/// Great-circle distance in kilometres, spherical law of cosines.
///
/// # Examples
///
/// ```rust
/// use geonear::geometry::great_circle_distance_km;
/// use geonear::Point;
///
/// let montreal = Point::new(-73.5673, 45.5017);
/// let quebec = Point::new(-71.2080, 46.8139);
///
/// let d = great_circle_distance_km(&montreal, &quebec);
/// assert!(d > 230.0 && d < 235.0);
/// ```
pub fn great_circle_distance_km(a: &Point<f64>, b: &Point<f64>) -> f64 {
    if a == b {
        return 0.0;
    }

    let (lat_a, lon_a) = (to_radians(a.y()), to_radians(a.x()));
    let (lat_b, lon_b) = (to_radians(b.y()), to_radians(b.x()));

    let cos_angle =
        lat_a.sin() * lat_b.sin() + lat_a.cos() * lat_b.cos() * (lon_a - lon_b).cos();

    // Rounding can push the cosine just outside [-1, 1] for identical or
    // antipodal points, where acos would return NaN.
    cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_KM
}

/// Smallest lon/lat box enclosing the circle of `radius_km` around `center`.
///
/// If the circle reaches a pole the box spans all longitudes and the
/// latitude bound on that side is pinned to ±90°. Otherwise the longitude
/// half-width is `asin(sin(r) / cos(lat))`; a bound that passes ±180° is
/// wrapped, which leaves `min.x() > max.x()` (see
/// [`BoundingBox::wraps_antimeridian`]).
///
/// # Errors
///
/// `InvalidInput` if the centre is not finite or the radius is negative or
/// not finite.
///
/// # Examples
///
/// ```rust
/// use geonear::geometry::compute_bounding_box;
/// use geonear::Point;
///
/// let bbox = compute_bounding_box(&Point::new(0.0, 0.0), 1000.0).unwrap();
/// assert_eq!(bbox.to_string(), "-8.993202,-8.993202,8.993202,8.993202");
/// ```
pub fn compute_bounding_box(center: &Point<f64>, radius_km: f64) -> Result<BoundingBox> {
    validate_coordinate(center)?;
    if !radius_km.is_finite() || radius_km < 0.0 {
        return Err(GeoNearError::InvalidInput(format!(
            "Radius must be a non-negative number of kilometres, got: {}",
            radius_km
        )));
    }

    let angular = angular_distance(radius_km);
    let half_height = to_degrees(angular);

    let lat = center.y();
    let min_lat = lat - half_height;
    let max_lat = lat + half_height;

    // A centre sitting on a pole has cos(lat) = 0, so it always goes here.
    if lat.abs() >= 90.0 || min_lat <= -90.0 || max_lat > 90.0 {
        return Ok(BoundingBox::full_longitude(
            min_lat.max(-90.0),
            max_lat.min(90.0),
        ));
    }

    let ratio = (angular.sin() / to_radians(lat).cos()).clamp(-1.0, 1.0);
    let half_width = to_degrees(ratio.asin());

    let mut min_lon = center.x() - half_width;
    let mut max_lon = center.x() + half_width;

    if min_lon < MIN_LON {
        min_lon += 360.0;
    }
    if max_lon > MAX_LON {
        max_lon -= 360.0;
    }

    Ok(BoundingBox::new(
        Point::new(min_lon, min_lat),
        Point::new(max_lon, max_lat),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox_string(lon: f64, lat: f64, distance: f64) -> String {
        compute_bounding_box(&Point::new(lon, lat), distance)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_conversions() {
        assert!((to_radians(180.0) - PI).abs() < 1e-15);
        assert!((to_degrees(PI) - 180.0).abs() < 1e-12);
        assert_eq!(to_radians(0.0), 0.0);
        assert!((to_degrees(to_radians(46.716993)) - 46.716993).abs() < 1e-12);
    }

    #[test]
    fn test_bounding_box_scenarios() {
        let cases = [
            (-71.269204, 46.716993, 2.0, "46.699007,-71.295438,46.734979,-71.242970"),
            (-0.0, 0.0, 1000.0, "-8.993202,-8.993202,8.993202,8.993202"),
            // near the north pole
            (147.3494, 64.7511, 1000.0, "55.757898,125.851468,73.744302,168.847332"),
            // on the north pole
            (180.0, 90.0, 1000.0, "81.006798,-180.000000,90.000000,180.000000"),
            // latitude outside the valid range still lands in the pole branch
            (78.0, 180.0, 5000.0, "135.033990,-180.000000,90.000000,180.000000"),
        ];

        for (lon, lat, distance, want) in cases {
            assert_eq!(bbox_string(lon, lat, distance), want, "centre ({lon}, {lat})");
        }
    }

    #[test]
    fn test_center_inside_box() {
        for lat in [-89.5, -45.0, -1.0, 0.0, 12.5, 46.716993, 75.0, 89.9] {
            for radius in [0.0, 0.5, 2.0, 100.0, 1000.0, 5000.0] {
                let bbox = compute_bounding_box(&Point::new(10.0, lat), radius).unwrap();
                assert!(bbox.min_lat() <= lat && lat <= bbox.max_lat());
                assert!(bbox.min_lon() <= bbox.max_lon());
            }
        }
    }

    #[test]
    fn test_north_pole_circle() {
        let bbox = compute_bounding_box(&Point::new(30.0, 85.0), 1000.0).unwrap();

        assert_eq!(bbox.max_lat(), 90.0);
        assert_eq!(bbox.min_lon(), -180.0);
        assert_eq!(bbox.max_lon(), 180.0);
        assert!((bbox.min_lat() - (85.0 - 8.993202)).abs() < 1e-6);
    }

    #[test]
    fn test_south_pole_circle() {
        let bbox = compute_bounding_box(&Point::new(-60.0, -88.0), 500.0).unwrap();

        assert_eq!(bbox.min_lat(), -90.0);
        assert!(bbox.is_full_longitude());
        assert!(bbox.max_lat() > -88.0);
    }

    #[test]
    fn test_polar_center_zero_radius() {
        let north = compute_bounding_box(&Point::new(0.0, 90.0), 0.0).unwrap();
        assert!(north.is_full_longitude());
        assert_eq!(north.min_lat(), 90.0);
        assert_eq!(north.max_lat(), 90.0);

        let south = compute_bounding_box(&Point::new(0.0, -90.0), 0.0).unwrap();
        assert!(south.is_full_longitude());
        assert_eq!(south.min_lat(), -90.0);
    }

    #[test]
    fn test_zero_radius_is_degenerate() {
        let center = Point::new(-71.269204, 46.716993);
        let bbox = compute_bounding_box(&center, 0.0).unwrap();

        assert_eq!(bbox.min, center);
        assert_eq!(bbox.max, center);
        assert!(bbox.contains(&center));
    }

    #[test]
    fn test_antimeridian_wrap() {
        let east = compute_bounding_box(&Point::new(179.9, 0.0), 50.0).unwrap();
        assert!(east.wraps_antimeridian());
        assert!(east.min_lon() > 179.0);
        assert!(east.max_lon() < -179.0);

        let west = compute_bounding_box(&Point::new(-179.9, 10.0), 50.0).unwrap();
        assert!(west.wraps_antimeridian());
        assert!(west.min_lon() > 179.0);
    }

    #[test]
    fn test_invalid_input() {
        let center = Point::new(0.0, 0.0);

        assert!(matches!(
            compute_bounding_box(&center, -1.0),
            Err(GeoNearError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_bounding_box(&center, f64::NAN),
            Err(GeoNearError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_bounding_box(&Point::new(f64::NAN, 0.0), 1.0),
            Err(GeoNearError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_bounding_box(&Point::new(0.0, f64::INFINITY), 1.0),
            Err(GeoNearError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_distance_identity_and_symmetry() {
        let points = [
            Point::new(-71.269204, 46.716993),
            Point::new(0.0, 0.0),
            Point::new(180.0, 90.0),
            Point::new(-123.1207, 49.2827),
        ];

        for a in &points {
            assert_eq!(great_circle_distance_km(a, a), 0.0);
            for b in &points {
                let ab = great_circle_distance_km(a, b);
                let ba = great_circle_distance_km(b, a);
                assert!((ab - ba).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_distance_antipodal() {
        let d = great_circle_distance_km(&Point::new(0.0, 0.0), &Point::new(180.0, 0.0));
        assert!(!d.is_nan());
        assert!((d - PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn test_distance_matches_haversine() {
        use geo::{Distance, Haversine};

        let toronto = Point::new(-79.3832, 43.6532);
        let vancouver = Point::new(-123.1207, 49.2827);

        let ours = great_circle_distance_km(&toronto, &vancouver);
        let theirs = Haversine.distance(toronto, vancouver) / 1000.0;

        // geo uses a slightly different mean radius
        assert!((ours - theirs).abs() < 5.0);
    }
}
