//! JSON bodies returned by the HTTP API.

use geonear::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A city as it appears in responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub cartodb_id: i64,
    pub name: String,
    pub population: i64,
    /// `[longitude, latitude]`
    pub coordinates: [f64; 2],
}

impl From<&Record> for City {
    fn from(record: &Record) -> Self {
        Self {
            cartodb_id: record.external_id,
            name: record.name().to_string(),
            population: record.population(),
            coordinates: [record.lon(), record.lat()],
        }
    }
}

/// Body of `GET /id/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityResponse {
    pub city: City,
}

/// Body of `GET /id/{id}?dist=N`, keyed by external ID.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CitiesResponse {
    pub cities: BTreeMap<String, City>,
}

impl<'a> FromIterator<&'a Record> for CitiesResponse {
    fn from_iter<I: IntoIterator<Item = &'a Record>>(records: I) -> Self {
        let cities = records
            .into_iter()
            .map(|record| (record.external_id.to_string(), City::from(record)))
            .collect();
        Self { cities }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub status: u16,
    pub error: String,
}

/// Any body the API can send.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    City(CityResponse),
    Cities(CitiesResponse),
    Error(ApiError),
}

impl Reply {
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Reply::Error(ApiError {
            status,
            error: message.into(),
        })
    }
}
