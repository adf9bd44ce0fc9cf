//! HTTP transport built on axum.
//!
//! # Endpoints
//!
//! - `GET /id/{city_id}`: the city with that CartoDB ID
//! - `GET /id/{city_id}?dist=N`: cities within the bounding box of a circle
//!   of `N` km around it
//!
//! Every response is JSON and carries an `API-Response-Time` header.

use crate::handler::Handler;
use crate::protocol::Reply;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::header::{CONTENT_TYPE, HeaderValue};
use axum::http::{HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::Serialize;
use std::future::Future;
use std::net::{AddrParseError, SocketAddr};
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tracing::{error, info};

pub const RESPONSE_TIME_HEADER: &str = "api-response-time";

/// Shared state of the HTTP routes.
#[derive(Clone)]
pub struct AppState {
    handler: Handler,
    pretty: bool,
}

impl AppState {
    pub fn new(handler: Handler, pretty: bool) -> Self {
        Self { handler, pretty }
    }
}

/// Routes of the API.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/id/:city_id", get(get_id))
        .with_state(state)
}

/// Serve `router(state)` on `listener` until `shutdown` resolves.
///
/// # Errors
/// Returns an error if the listener fails.
pub async fn run_server(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    info!("geonear HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Parse a listen address; a bare `:PORT` binds every interface.
pub fn parse_listen_addr(listen: &str) -> Result<SocketAddr, AddrParseError> {
    if listen.starts_with(':') {
        format!("0.0.0.0{}", listen).parse()
    } else {
        listen.parse()
    }
}

async fn get_id(
    State(state): State<AppState>,
    Path(city_id): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let started = Instant::now();

    // proximity mode only when exactly one `dist` is given
    let mut dists = params.iter().filter(|(key, _)| key == "dist");
    let dist = match (dists.next(), dists.next()) {
        (Some((_, value)), None) => Some(value.as_str()),
        _ => None,
    };

    let (status, reply) = state.handler.get_id(&city_id, dist);
    render(status, &reply, state.pretty, started.elapsed())
}

fn render(status: u16, reply: &Reply, pretty: bool, elapsed: Duration) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let body = match encode(reply, pretty) {
        Ok(body) => body,
        Err(e) => {
            error!("Failed to encode response: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let mut response = (status, body).into_response();
    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Ok(value) = HeaderValue::from_str(&format!("{:?}", elapsed)) {
        headers.insert(HeaderName::from_static(RESPONSE_TIME_HEADER), value);
    }
    response
}

fn encode<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<Vec<u8>> {
    let mut body = Vec::new();
    if pretty {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut body, formatter);
        value.serialize(&mut serializer)?;
    } else {
        serde_json::to_writer(&mut body, value)?;
    }
    body.push(b'\n');
    Ok(body)
}
