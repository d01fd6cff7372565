//! API data transfer objects.
//!
//! These types define the JSON shapes returned by the HTTP endpoints and their
//! OpenAPI schemas. They carry no behaviour; the server assembles them from domain
//! models.

pub mod api;
pub mod circuit_summary;
pub mod constructor_summary;
pub mod driver_summary;
pub mod race;
