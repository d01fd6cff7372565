//! Server-side API backend.
//!
//! The backend serves read-only race summaries from the race database. It uses Axum as
//! the web framework and SeaORM for database access.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers and OpenAPI annotations
//! - **Service Layer** (`service/`) - Existence checks, read transactions and payload assembly
//! - **Data Layer** (`data/`) - Queries and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models with parsed positions and times
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Util** (`util/`) - Parsing of raw columns and display formatting
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Tracing, database connection and CORS setup
//! - **Router** (`router`) - Route registration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and dispatches it to a controller
//! 2. **Controller** extracts the race id and calls the service
//! 3. **Service** opens a read transaction and checks that the race exists
//! 4. **Data** queries the tables and converts entities to domain models
//! 5. **Service** builds the response DTO from the domain models
//! 6. **Controller** returns the DTO as JSON

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
