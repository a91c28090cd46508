//! Domain library for the facility operations service.
//!
//! Collections live as whole JSON arrays in a string key-value store, one key
//! per collection. Services read a collection, transform it in memory, and
//! write the whole array back. There is exactly one writer; the last write
//! wins and no version token is kept.

pub mod config;
pub mod error;
pub mod operations;
pub mod store;
pub mod telemetry;
