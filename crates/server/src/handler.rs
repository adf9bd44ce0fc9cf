//! Request handling independent of the transport.
//!
//! Turns path and query parameters into engine calls and engine results into
//! a status code plus [`Reply`].

use crate::protocol::{CitiesResponse, City, CityResponse, Reply};
use geonear::{GeoNearError, QueryEngine};
use std::sync::Arc;
use tracing::{debug, error};

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

#[derive(Clone)]
pub struct Handler {
    engine: Arc<QueryEngine>,
}

impl Handler {
    pub fn new(engine: Arc<QueryEngine>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    /// `GET /id/{city_id}`, optionally with a single `dist` query value.
    pub fn get_id(&self, city_id: &str, dist: Option<&str>) -> (u16, Reply) {
        let city_id: i64 = match city_id.parse() {
            Ok(id) => id,
            Err(e) => return (STATUS_BAD_REQUEST, Reply::error(STATUS_BAD_REQUEST, e.to_string())),
        };

        let Some(record) = self.engine.find_by_id(city_id) else {
            return (
                STATUS_NOT_FOUND,
                Reply::error(
                    STATUS_NOT_FOUND,
                    format!("no city found for CartoDB_ID {}", city_id),
                ),
            );
        };

        match dist {
            Some(dist) => self.cities_near(city_id, dist),
            None => (
                STATUS_OK,
                Reply::City(CityResponse {
                    city: City::from(record),
                }),
            ),
        }
    }

    fn cities_near(&self, city_id: i64, dist: &str) -> (u16, Reply) {
        let radius_km: f64 = match dist.parse() {
            Ok(radius) => radius,
            Err(_) => {
                return (
                    STATUS_BAD_REQUEST,
                    Reply::error(
                        STATUS_BAD_REQUEST,
                        format!("{:?} is not a valid distance", dist),
                    ),
                );
            }
        };

        match self.engine.find_near_default(city_id, radius_km) {
            Ok(records) => {
                debug!("{} cities within {} km of {}", records.len(), radius_km, city_id);
                (STATUS_OK, Reply::Cities(records.into_iter().collect::<CitiesResponse>()))
            }
            Err(e) => {
                let status = status_for(&e);
                if status == STATUS_INTERNAL_SERVER_ERROR {
                    error!("Proximity query around {} failed: {}", city_id, e);
                }
                (status, Reply::error(status, e.to_string()))
            }
        }
    }
}

/// HTTP status for an engine error.
pub fn status_for(err: &GeoNearError) -> u16 {
    match err {
        GeoNearError::NotFound(_) => STATUS_NOT_FOUND,
        GeoNearError::InvalidInput(_) => STATUS_BAD_REQUEST,
        _ => STATUS_INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geonear::{Point, Record, RecordSet};

    fn handler(exclude_origin: bool) -> Handler {
        let engine = QueryEngine::builder()
            .exclude_origin(exclude_origin)
            .records(RecordSet::from_records(vec![
                Record::new(1, Point::new(-75.6972, 45.4215)).with_name("Ottawa"),
                Record::new(2, Point::new(-75.7013, 45.4765)).with_name("Gatineau"),
                Record::new(3, Point::new(-79.3832, 43.6532)).with_name("Toronto"),
            ]))
            .build()
            .unwrap();
        Handler::new(Arc::new(engine))
    }

    #[test]
    fn test_get_city() {
        let (status, reply) = handler(false).get_id("2", None);
        assert_eq!(status, STATUS_OK);
        match reply {
            Reply::City(body) => assert_eq!(body.city.name, "Gatineau"),
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn test_bad_id() {
        let (status, reply) = handler(false).get_id("ottawa", None);
        assert_eq!(status, STATUS_BAD_REQUEST);
        assert!(matches!(reply, Reply::Error(ref e) if e.status == 400));
    }

    #[test]
    fn test_unknown_id() {
        let (status, reply) = handler(false).get_id("99", Some("10"));
        assert_eq!(status, STATUS_NOT_FOUND);
        assert_eq!(reply, Reply::error(404, "no city found for CartoDB_ID 99"));
    }

    #[test]
    fn test_cities_near() {
        let (status, reply) = handler(false).get_id("1", Some("10"));
        assert_eq!(status, STATUS_OK);
        let Reply::Cities(body) = reply else {
            panic!("expected cities");
        };
        let ids: Vec<&str> = body.cities.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["1", "2"]);

        let (_, reply) = handler(true).get_id("1", Some("10"));
        let Reply::Cities(body) = reply else {
            panic!("expected cities");
        };
        assert_eq!(body.cities.len(), 1);
        assert!(body.cities.contains_key("2"));
    }

    #[test]
    fn test_bad_distance() {
        let (status, reply) = handler(false).get_id("1", Some("far"));
        assert_eq!(status, STATUS_BAD_REQUEST);
        assert_eq!(reply, Reply::error(400, "\"far\" is not a valid distance"));
    }

    #[test]
    fn test_negative_distance() {
        let (status, reply) = handler(false).get_id("1", Some("-5"));
        assert_eq!(status, STATUS_BAD_REQUEST);
        assert!(matches!(reply, Reply::Error(_)));
    }

    #[test]
    fn test_status_for_errors() {
        assert_eq!(status_for(&GeoNearError::NotFound(1)), 404);
        assert_eq!(status_for(&GeoNearError::InvalidInput("x".into())), 400);
        assert_eq!(status_for(&GeoNearError::InvalidFormat("x".into())), 500);
    }
}
