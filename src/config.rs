//! Index and query configuration.
use crate::error::{GeoNearError, Result};

/// Settings applied when the index is built and when proximity queries run.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Leave records with a population of zero out of both indexes
    #[serde(default)]
    pub filter_zero_population: bool,

    /// Drop the origin's external ID from proximity results unless the
    /// caller says otherwise
    #[serde(default)]
    pub exclude_origin: bool,
}

impl Config {
    pub fn with_filter_zero_population(mut self, enabled: bool) -> Self {
        self.filter_zero_population = enabled;
        self
    }

    pub fn with_exclude_origin(mut self, enabled: bool) -> Self {
        self.exclude_origin = enabled;
        self
    }

    /// Combine with another configuration, keeping any option either one
    /// switches on.
    pub fn merge(mut self, other: &Config) -> Self {
        self.filter_zero_population |= other.filter_zero_population;
        self.exclude_origin |= other.exclude_origin;
        self
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load a configuration file, picking the format from its extension.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            #[cfg(feature = "toml")]
            Some("toml") => Self::from_toml(&content)
                .map_err(|e| GeoNearError::Config(format!("{}: {}", path.display(), e))),
            #[cfg(not(feature = "toml"))]
            Some("toml") => Err(GeoNearError::Config(format!(
                "{}: TOML support requires the `toml` feature",
                path.display()
            ))),
            _ => Self::from_json(&content)
                .map_err(|e| GeoNearError::Config(format!("{}: {}", path.display(), e))),
        }
    }
}
