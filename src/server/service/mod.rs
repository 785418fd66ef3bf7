//! Business logic between controllers and the data layer.
//!
//! Each collection has a service enforcing its save rules (reset flag,
//! non-empty and unique names, valid dates, the protected admin account);
//! `report` holds the attendance aggregator.

pub mod player;
pub mod report;
pub mod training;
pub mod user;

#[cfg(test)]
mod test;
