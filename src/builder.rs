//! Engine builder
//!
//! Loads the record set once, builds the spatial index over it and hands back
//! a ready [`QueryEngine`].

use crate::config::Config;
use crate::error::Result;
use crate::index::SpatialIndex;
use crate::query::QueryEngine;
use crate::store::RecordSet;
use std::path::PathBuf;

#[derive(Debug)]
enum Source {
    Records(RecordSet),
    GeoJsonPath(PathBuf),
}

/// Builder for a [`QueryEngine`] with a record source and index settings.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    source: Option<Source>,
    config: Config,
}

impl EngineBuilder {
    /// Create a builder with default configuration and no records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Leave zero-population records out of the indexes.
    pub fn filter_zero_population(mut self, enabled: bool) -> Self {
        self.config = self.config.with_filter_zero_population(enabled);
        self
    }

    /// Default for `exclude_origin` in [`QueryEngine::find_near_default`].
    pub fn exclude_origin(mut self, enabled: bool) -> Self {
        self.config = self.config.with_exclude_origin(enabled);
        self
    }

    /// Index an already loaded record set.
    pub fn records(mut self, records: RecordSet) -> Self {
        self.source = Some(Source::Records(records));
        self
    }

    /// Load records from a GeoJSON feature collection file at build time.
    pub fn geojson_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.source = Some(Source::GeoJsonPath(path.into()));
        self
    }

    /// Load the records, if a path was given, and build the indexes.
    pub fn build(self) -> Result<QueryEngine> {
        let records = match self.source {
            Some(Source::Records(records)) => records,
            Some(Source::GeoJsonPath(path)) => {
                log::info!("Reading data from {}", path.display());
                RecordSet::open(&path)?
            }
            None => RecordSet::default(),
        };

        let index = SpatialIndex::build(records, self.config.filter_zero_population);
        Ok(QueryEngine::new(index, self.config))
    }
}
