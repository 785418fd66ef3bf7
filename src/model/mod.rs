//! Wire-level data transfer objects shared by all endpoints.
//!
//! The collection records in this module double as the persisted form: the
//! store writes them to disk exactly as they travel over the API, one JSON
//! array per collection.

pub mod api;
pub mod player;
pub mod report;
pub mod training;
pub mod user;
