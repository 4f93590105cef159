//! HTTP surface for the alumni network.
//!
//! Exposed as a library so integration tests can build the exact router and
//! middleware stack the production binary runs.

pub mod config;
pub mod error;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
