//! HTTP layer for the presentation-builder service.
//!
//! Exposed as a library so integration tests can build the exact router and
//! middleware stack the binary runs.

pub mod config;
pub mod error;
pub mod handlers;
pub mod multipart;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
