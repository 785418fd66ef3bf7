//! Data access layer: the JSON document store and one repository per
//! collection.
//!
//! Repositories convert between the store's bulk read/replace primitives and
//! the queries the services need (range selection over trainings, roster
//! ordering over players).

pub mod player;
pub mod store;
pub mod training;
pub mod user;
