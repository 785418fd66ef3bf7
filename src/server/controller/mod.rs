//! HTTP request handlers, one module per collection plus the report.

pub mod player;
pub mod report;
pub mod training;
pub mod user;

/// Response header carrying the collection version after a read or a save,
/// usable as `expectedVersion` on a later save.
pub const COLLECTION_VERSION_HEADER: &str = "x-collection-version";
