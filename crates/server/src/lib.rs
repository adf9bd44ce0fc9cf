//! geonear server
//!
//! HTTP front end for a [`geonear::QueryEngine`] loaded once at startup.
//!
//! # Example
//!
//! ```ignore
//! use geonear_server::{AppState, Handler, run_server};
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//! let state = AppState::new(Handler::new(engine), false);
//! run_server(listener, state, shutdown).await?;
//! ```

pub mod args;
pub mod handler;
pub mod protocol;
pub mod transport;

pub use args::ServerArgs;
pub use handler::Handler;
pub use protocol::{ApiError, CitiesResponse, City, CityResponse, Reply};
pub use transport::http::{AppState, parse_listen_addr, router, run_server};
