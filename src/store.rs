//! Record store: the ordered, load-once list of records the index is built
//! over, and its GeoJSON loader.
//!
//! A record's position in the set is its internal handle. Positions are
//! assigned in source order and never change.

use crate::error::{GeoNearError, Result};
use geojson::{Feature, GeoJson, Value};
use geonear_types::{Point, Properties, Record};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Immutable, ordered sequence of records addressed by position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<Record>,
}

/// Properties object of a source feature; `cartodb_id` is the external ID.
#[derive(Deserialize)]
struct FeatureProperties {
    #[serde(default)]
    cartodb_id: i64,
    #[serde(flatten)]
    properties: Properties,
}

impl RecordSet {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Read a GeoJSON feature collection from a file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_geojson_str(&content)
    }

    /// Parse a GeoJSON `FeatureCollection` of `Point` features.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geonear::store::RecordSet;
    ///
    /// let json = r#"{
    ///   "type": "FeatureCollection",
    ///   "features": [{
    ///     "type": "Feature",
    ///     "geometry": {"type": "Point", "coordinates": [-71.269204, 46.716993]},
    ///     "properties": {"cartodb_id": 7, "name": "Québec", "population": 528595}
    ///   }]
    /// }"#;
    ///
    /// let records = RecordSet::from_geojson_str(json).unwrap();
    /// assert_eq!(records.len(), 1);
    /// assert_eq!(records.get(0).unwrap().external_id, 7);
    /// ```
    pub fn from_geojson_str(geojson: &str) -> Result<Self> {
        let parsed: GeoJson = geojson
            .parse()
            .map_err(|e| GeoNearError::InvalidFormat(format!("Failed to parse GeoJSON: {}", e)))?;

        let collection = match parsed {
            GeoJson::FeatureCollection(collection) => collection,
            _ => {
                return Err(GeoNearError::InvalidFormat(
                    "GeoJSON document is not a FeatureCollection".to_string(),
                ));
            }
        };

        let records = collection
            .features
            .into_iter()
            .enumerate()
            .map(|(position, feature)| record_from_feature(position, feature))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_records(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    /// Records paired with their positions, in order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Record)> + '_ {
        self.records.iter().enumerate()
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        Self::from_records(records)
    }
}

fn record_from_feature(position: usize, feature: Feature) -> Result<Record> {
    let coordinate = match feature.geometry.map(|geometry| geometry.value) {
        Some(Value::Point(coords)) => {
            if coords.len() < 2 {
                return Err(GeoNearError::InvalidFormat(format!(
                    "feature {}: Point must have at least 2 coordinates",
                    position
                )));
            }
            Point::new(coords[0], coords[1])
        }
        Some(_) => {
            return Err(GeoNearError::InvalidFormat(format!(
                "feature {}: geometry is not a Point",
                position
            )));
        }
        None => {
            return Err(GeoNearError::InvalidFormat(format!(
                "feature {}: missing geometry",
                position
            )));
        }
    };

    let mut object = feature.properties.unwrap_or_default();
    // null properties fall back to their defaults
    object.retain(|_, value| !value.is_null());

    let FeatureProperties {
        cartodb_id,
        properties,
    } = serde_json::from_value(serde_json::Value::Object(object)).map_err(|e| {
        GeoNearError::InvalidFormat(format!("feature {}: invalid properties: {}", position, e))
    })?;

    Ok(Record::new(cartodb_id, coordinate).with_properties(properties))
}
