//! HTTP request handlers.
//!
//! Handlers extract the race id, call the service layer and return JSON. Every handler
//! carries a `#[utoipa::path]` annotation so it is listed in the generated OpenAPI
//! document.

pub mod param;
pub mod race;
pub mod summary;

#[cfg(test)]
mod test;
