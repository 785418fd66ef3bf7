//! Shared helpers for store-backed tests.
//!
//! Provides a fluent builder that seeds a temporary data directory with
//! collection fixture files, plus factory functions producing fixture JSON
//! for the three record types.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixture;
