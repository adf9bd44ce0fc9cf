//! Query engine: exact lookup by external ID and proximity lookup around a
//! record.

use crate::builder::EngineBuilder;
use crate::config::Config;
use crate::error::{GeoNearError, Result};
use crate::geometry::compute_bounding_box;
use crate::index::SpatialIndex;
use geonear_types::Record;

/// Read-only query surface over a built [`SpatialIndex`].
///
/// Construct it once at startup, then share it (for example behind an
/// `Arc`) with every request handler.
///
/// # Examples
///
/// ```rust
/// use geonear::store::RecordSet;
/// use geonear::{Point, QueryEngine, Record};
///
/// let engine = QueryEngine::builder()
///     .records(RecordSet::from_records(vec![
///         Record::new(1, Point::new(-71.269204, 46.716993)).with_name("Québec"),
///         Record::new(2, Point::new(-71.2800, 46.7300)).with_name("Sillery"),
///         Record::new(3, Point::new(-73.5673, 45.5017)).with_name("Montréal"),
///     ]))
///     .build()?;
///
/// let near: Vec<&str> = engine
///     .find_near(1, 5.0, true)?
///     .into_iter()
///     .map(|r| r.name())
///     .collect();
/// assert_eq!(near, vec!["Sillery"]);
/// # Ok::<(), geonear::GeoNearError>(())
/// ```
#[derive(Debug)]
pub struct QueryEngine {
    index: SpatialIndex,
    config: Config,
}

impl QueryEngine {
    pub fn new(index: SpatialIndex, config: Config) -> Self {
        Self { index, config }
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Record indexed under `id`, if any.
    pub fn find_by_id(&self, id: i64) -> Option<&Record> {
        self.index.lookup_by_id(id)
    }

    /// Indexed records inside the bounding box of the circle of `radius_km`
    /// around the record indexed under `origin_id`.
    ///
    /// Results come in descending latitude order, ties in ascending record
    /// position. With `exclude_origin` set, every record carrying
    /// `origin_id` is left out, whatever its position. When the box wraps the
    /// antimeridian a candidate's longitude only has to fall on one side of
    /// it.
    ///
    /// # Errors
    ///
    /// `NotFound` if no indexed record has `origin_id`; `InvalidInput` if
    /// `radius_km` is negative or not finite.
    pub fn find_near(
        &self,
        origin_id: i64,
        radius_km: f64,
        exclude_origin: bool,
    ) -> Result<Vec<&Record>> {
        let origin = self
            .find_by_id(origin_id)
            .ok_or(GeoNearError::NotFound(origin_id))?;

        let bbox = compute_bounding_box(&origin.coordinate, radius_km).inspect_err(|e| {
            log::warn!("Rejecting proximity query around {}: {}", origin_id, e);
        })?;

        let found: Vec<&Record> = self
            .index
            .range_scan_descending(bbox.max_lat(), bbox.min_lat())
            .filter(|candidate| !(exclude_origin && candidate.external_id == origin_id))
            .filter(|candidate| bbox.contains_lon(candidate.lon()))
            .collect();

        log::debug!(
            "Proximity query around {} within {} km: box {} matched {} records",
            origin_id,
            radius_km,
            bbox,
            found.len()
        );

        Ok(found)
    }

    /// [`find_near`](Self::find_near) using the configured `exclude_origin`.
    pub fn find_near_default(&self, origin_id: i64, radius_km: f64) -> Result<Vec<&Record>> {
        self.find_near(origin_id, radius_km, self.config.exclude_origin)
    }

    /// Number of records present in the indexes.
    pub fn indexed_count(&self) -> usize {
        self.index.range_len()
    }

    /// Number of records loaded, indexed or not.
    pub fn record_count(&self) -> usize {
        self.index.records().len()
    }

    pub fn index(&self) -> &SpatialIndex {
        &self.index
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
