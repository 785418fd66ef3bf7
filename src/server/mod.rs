//! Server-side API backend and business logic.
//!
//! The backend follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business-rule validation and the report aggregator
//! - **Data Layer** (`data/`) - Collection repositories over the JSON document store
//! - **Model Layer** (`model/`) - Operation parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the collection store)
//! - **Startup** (`startup`) - Tracing setup and store initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Utilities** (`util/`) - German date display formatting and parsing

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
