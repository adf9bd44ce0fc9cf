use geo::Point;
use serde::{Deserialize, Serialize};

/// Descriptive fields carried by a record.
///
/// The index never looks at these except for `population`, which the
/// zero-population filter reads at build time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Properties {
    pub name: String,
    pub place_key: String,
    pub capital: String,
    pub population: i64,
    pub pclass: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// One geo-tagged point.
///
/// `external_id` is supplied by the data source and is not guaranteed to be
/// unique across a record set.
///
/// # Examples
///
/// ```
/// use geonear_types::{Point, Record};
///
/// let quebec = Record::new(7, Point::new(-71.269204, 46.716993)).with_name("Québec");
/// assert_eq!(quebec.lat(), 46.716993);
/// assert_eq!(quebec.lon(), -71.269204);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub external_id: i64,
    pub coordinate: Point<f64>,
    pub properties: Properties,
}

impl Record {
    pub fn new(external_id: i64, coordinate: Point<f64>) -> Self {
        Self {
            external_id,
            coordinate,
            properties: Properties::default(),
        }
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.properties.name = name.into();
        self
    }

    pub fn with_population(mut self, population: i64) -> Self {
        self.properties.population = population;
        self
    }

    pub fn lat(&self) -> f64 {
        self.coordinate.y()
    }

    pub fn lon(&self) -> f64 {
        self.coordinate.x()
    }

    pub fn name(&self) -> &str {
        &self.properties.name
    }

    pub fn population(&self) -> i64 {
        self.properties.population
    }
}
