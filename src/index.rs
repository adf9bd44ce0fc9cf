//! Spatial index over an immutable record set.
//!
//! Two ordered structures are built in a single pass and never modified:
//!
//! - an exact index from external ID to record position, where a later
//!   record with the same ID overwrites an earlier one;
//! - a range index ordered by latitude, ties kept in ascending position, which
//!   answers descending latitude scans.
//!
//! A record excluded by the zero-population filter stays in the record set
//! but appears in neither index.

use crate::store::RecordSet;
use geonear_types::Record;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::iter::Rev;
use std::slice;

/// Positions sharing one latitude, in ascending order.
type Positions = SmallVec<[usize; 2]>;

/// Latitude with a total order so it can key a `BTreeMap`.
#[derive(Debug, Clone, Copy)]
struct LatKey(f64);

impl LatKey {
    fn new(lat: f64) -> Self {
        // -0.0 and 0.0 must land on the same key
        Self(lat + 0.0)
    }
}

impl PartialEq for LatKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for LatKey {}

impl PartialOrd for LatKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LatKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Exact and latitude indexes over a frozen `RecordSet`.
///
/// The index owns its records and exposes only shared references, so a built
/// index can be read from any number of threads.
///
/// # Examples
///
/// ```rust
/// use geonear::index::SpatialIndex;
/// use geonear::store::RecordSet;
/// use geonear::{Point, Record};
///
/// let records = RecordSet::from_records(vec![
///     Record::new(1, Point::new(-71.2, 46.8)),
///     Record::new(2, Point::new(-73.6, 45.5)),
/// ]);
/// let index = SpatialIndex::build(records, false);
///
/// assert_eq!(index.lookup_by_id(2).unwrap().lat(), 45.5);
/// let north_first: Vec<i64> = index
///     .range_scan_descending(90.0, -90.0)
///     .map(|r| r.external_id)
///     .collect();
/// assert_eq!(north_first, vec![1, 2]);
/// ```
#[derive(Debug)]
pub struct SpatialIndex {
    records: RecordSet,
    by_id: BTreeMap<i64, usize>,
    by_lat: BTreeMap<LatKey, Positions>,
    range_len: usize,
    filter_zero_population: bool,
}

impl SpatialIndex {
    /// Index `records` in order. With `filter_zero_population` set, records
    /// whose population is zero are left out of both indexes.
    pub fn build(records: RecordSet, filter_zero_population: bool) -> Self {
        let mut by_id = BTreeMap::new();
        let mut by_lat: BTreeMap<LatKey, Positions> = BTreeMap::new();
        let mut range_len = 0;
        let mut skipped = 0;

        for (position, record) in records.iter() {
            if filter_zero_population && record.population() == 0 {
                log::debug!(
                    "Skipping record {} at position {}: population is zero",
                    record.external_id,
                    position
                );
                skipped += 1;
                continue;
            }

            if let Some(previous) = by_id.insert(record.external_id, position) {
                log::debug!(
                    "External id {} at position {} replaces position {}",
                    record.external_id,
                    position,
                    previous
                );
            }

            by_lat
                .entry(LatKey::new(record.lat()))
                .or_default()
                .push(position);
            range_len += 1;
        }

        log::info!(
            "Indexed {} of {} records ({} distinct ids, {} skipped)",
            range_len,
            records.len(),
            by_id.len(),
            skipped
        );

        Self {
            records,
            by_id,
            by_lat,
            range_len,
            filter_zero_population,
        }
    }

    /// Record most recently indexed under `id`.
    pub fn lookup_by_id(&self, id: i64) -> Option<&Record> {
        self.lookup_position(id)
            .and_then(|position| self.records.get(position))
    }

    /// Position most recently indexed under `id`.
    pub(crate) fn lookup_position(&self, id: i64) -> Option<usize> {
        self.by_id.get(&id).copied()
    }

    /// Indexed records with latitude in `[lat_min, lat_max]`, highest latitude
    /// first and ties in ascending position.
    ///
    /// The scan is lazy. Call again, or clone it, to restart. An inverted or
    /// NaN range yields nothing.
    pub fn range_scan_descending(&self, lat_max: f64, lat_min: f64) -> RangeScan<'_> {
        let entries = if lat_min.is_nan() || lat_max.is_nan() || lat_min > lat_max {
            None
        } else {
            Some(
                self.by_lat
                    .range(LatKey::new(lat_min)..=LatKey::new(lat_max))
                    .rev(),
            )
        };

        RangeScan {
            records: &self.records,
            entries,
            current: [].iter(),
        }
    }

    /// Number of distinct external IDs in the exact index.
    pub fn exact_len(&self) -> usize {
        self.by_id.len()
    }

    /// Number of entries in the range index, i.e. indexed records.
    pub fn range_len(&self) -> usize {
        self.range_len
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    pub fn filters_zero_population(&self) -> bool {
        self.filter_zero_population
    }
}

/// Descending latitude scan produced by [`SpatialIndex::range_scan_descending`].
#[derive(Clone)]
pub struct RangeScan<'a> {
    records: &'a RecordSet,
    entries: Option<Rev<btree_map::Range<'a, LatKey, Positions>>>,
    current: slice::Iter<'a, usize>,
}

impl<'a> Iterator for RangeScan<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(&position) = self.current.next() {
                return self.records.get(position);
            }
            let (_, positions) = self.entries.as_mut()?.next()?;
            self.current = positions.iter();
        }
    }
}
