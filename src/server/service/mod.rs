//! Service layer for race lookups and summary aggregation.
//!
//! Services sit between the controllers and the repositories. They own the read
//! transaction of a request, validate that the requested race exists, and turn
//! domain models into the response DTOs.

pub mod race;
pub mod summary;

#[cfg(test)]
mod test;
