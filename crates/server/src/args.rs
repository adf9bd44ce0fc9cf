//! Command line options of the server binary.

use clap::Parser;
use geonear::{Config, EngineBuilder};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Serve city lookups and proximity queries over HTTP", long_about = None)]
pub struct ServerArgs {
    /// GeoJSON feature collection to load
    #[arg(short = 'f', long, default_value = "data/canada_cities.geojson")]
    pub filename: PathBuf,

    /// Address to listen on; `:PORT` listens on every interface
    #[arg(short = 'l', long, default_value = ":8000")]
    pub listen: String,

    /// Leave cities with zero population out of the indexes
    #[arg(long = "nz")]
    pub filter_zero_population: bool,

    /// Indent JSON responses
    #[arg(long)]
    pub pretty: bool,

    /// Leave the origin city out of proximity results
    #[arg(long)]
    pub exclude_origin: bool,

    /// JSON (or TOML) file with index settings
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
}

impl ServerArgs {
    /// Settings from the config file, if any, with the flags switched on top.
    pub fn engine_config(&self) -> geonear::Result<Config> {
        let base = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        let flags = Config::default()
            .with_filter_zero_population(self.filter_zero_population)
            .with_exclude_origin(self.exclude_origin);

        Ok(base.merge(&flags))
    }

    pub fn engine_builder(&self) -> geonear::Result<EngineBuilder> {
        Ok(EngineBuilder::new()
            .config(self.engine_config()?)
            .geojson_path(&self.filename))
    }
}
