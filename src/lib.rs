//! Receipt points service
//!
//! Scores submitted retail receipts with a fixed rule set, keys each score
//! by a SHA-256 of the submitted bytes, and serves lookups over HTTP.

pub mod api;
pub mod config;
pub mod receipt;
pub mod scoring;
pub mod store;
