//! Shared domain types, errors, and pure helpers for the alumni network.
//!
//! This crate has no internal dependencies so it can be used by the
//! repository layer, the services, and any CLI or API binary alike.

pub mod error;
pub mod filter;
pub mod types;
pub mod validate;
