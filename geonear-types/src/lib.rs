//! # geonear-types
//!
//! Plain data types shared by the geonear index and its serving layer.
//!
//! - **Coordinates**: `geo::Point<f64>`, with `x` as longitude and `y` as
//!   latitude, both in degrees.
//! - **Records**: `Record` and its pass-through `Properties`.
//! - **Boxes**: `BoundingBox`, which unlike `geo::Rect` keeps its longitude
//!   bounds in the order they were computed so a box can wrap the antimeridian.
//!
//! ## Examples
//!
//! ```rust
//! use geonear_types::{BoundingBox, Point};
//!
//! let bbox = BoundingBox::new(Point::new(-71.3, 46.6), Point::new(-71.2, 46.8));
//! assert!(bbox.contains(&Point::new(-71.25, 46.7)));
//! ```

pub mod bbox;
pub mod record;

pub use bbox::BoundingBox;
pub use geo::Point;
pub use record::{Properties, Record};
