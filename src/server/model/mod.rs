//! Operation parameter types used between controllers and services.

pub mod collection;
pub mod report;
