//! In-memory proximity lookups over a load-once set of geo-tagged points.
//!
//! Records are loaded once, indexed by external ID and by latitude, and then
//! queried read-only for the life of the process.
//!
//! ```rust
//! use geonear::store::RecordSet;
//! use geonear::{Point, QueryEngine, Record};
//!
//! let engine = QueryEngine::builder()
//!     .records(RecordSet::from_records(vec![
//!         Record::new(1, Point::new(-79.3832, 43.6532)).with_name("Toronto"),
//!         Record::new(2, Point::new(-79.6441, 43.5890)).with_name("Mississauga"),
//!         Record::new(3, Point::new(-123.1207, 49.2827)).with_name("Vancouver"),
//!     ]))
//!     .build()?;
//!
//! assert_eq!(engine.find_by_id(3).unwrap().name(), "Vancouver");
//! let near_toronto = engine.find_near(1, 30.0, true)?;
//! assert_eq!(near_toronto.len(), 1);
//! # Ok::<(), geonear::GeoNearError>(())
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod geometry;
pub mod index;
pub mod query;
pub mod store;

pub use builder::EngineBuilder;
pub use config::Config;
pub use error::{GeoNearError, Result};
pub use query::QueryEngine;

pub use geonear_types::{BoundingBox, Point, Properties, Record};

pub use geometry::{EARTH_RADIUS_KM, compute_bounding_box, great_circle_distance_km};
pub use index::{RangeScan, SpatialIndex};
pub use store::RecordSet;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{
        BoundingBox, Config, EngineBuilder, GeoNearError, Point, QueryEngine, Record, RecordSet,
        Result,
    };
}
