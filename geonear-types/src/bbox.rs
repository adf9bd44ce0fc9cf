use geo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An axis-aligned box in longitude/latitude space.
///
/// `min` holds the western/southern corner and `max` the eastern/northern one.
/// When the box crosses the antimeridian the longitude bounds stay as
/// computed, so `min.x() > max.x()`; membership then means "east of `min` OR
/// west of `max`".
///
/// # Examples
///
/// ```
/// use geonear_types::{BoundingBox, Point};
///
/// // A box straddling the 180th meridian.
/// let bbox = BoundingBox::new(Point::new(179.0, -1.0), Point::new(-179.0, 1.0));
/// assert!(bbox.wraps_antimeridian());
/// assert!(bbox.contains(&Point::new(179.5, 0.0)));
/// assert!(bbox.contains(&Point::new(-179.5, 0.0)));
/// assert!(!bbox.contains(&Point::new(0.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point<f64>,
    pub max: Point<f64>,
}

impl BoundingBox {
    pub fn new(min: Point<f64>, max: Point<f64>) -> Self {
        Self { min, max }
    }

    /// Box covering every longitude between two latitudes.
    pub fn full_longitude(min_lat: f64, max_lat: f64) -> Self {
        Self {
            min: Point::new(-180.0, min_lat),
            max: Point::new(180.0, max_lat),
        }
    }

    pub fn min_lat(&self) -> f64 {
        self.min.y()
    }

    pub fn max_lat(&self) -> f64 {
        self.max.y()
    }

    pub fn min_lon(&self) -> f64 {
        self.min.x()
    }

    pub fn max_lon(&self) -> f64 {
        self.max.x()
    }

    /// True when the longitude bounds were wrapped across ±180°.
    pub fn wraps_antimeridian(&self) -> bool {
        self.min_lon() > self.max_lon()
    }

    /// True when the box spans the whole longitude range, as it does when
    /// the enclosed circle contains a pole.
    pub fn is_full_longitude(&self) -> bool {
        self.min_lon() <= -180.0 && self.max_lon() >= 180.0
    }

    pub fn contains_lat(&self, lat: f64) -> bool {
        lat >= self.min_lat() && lat <= self.max_lat()
    }

    /// Longitude test. A full-longitude box accepts any longitude, including
    /// values outside [-180, 180].
    pub fn contains_lon(&self, lon: f64) -> bool {
        if self.is_full_longitude() {
            true
        } else if self.wraps_antimeridian() {
            lon >= self.min_lon() || lon <= self.max_lon()
        } else {
            lon >= self.min_lon() && lon <= self.max_lon()
        }
    }

    pub fn contains(&self, point: &Point<f64>) -> bool {
        self.contains_lat(point.y()) && self.contains_lon(point.x())
    }
}

impl fmt::Display for BoundingBox {
    /// `minLat,minLon,maxLat,maxLon` with six decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6},{:.6},{:.6},{:.6}",
            self.min_lat(),
            self.min_lon(),
            self.max_lat(),
            self.max_lon()
        )
    }
}
