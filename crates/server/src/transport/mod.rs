//! Transport layer for the geonear server
//!
//! Only HTTP is served; request semantics live in [`crate::handler`].

pub mod http;
