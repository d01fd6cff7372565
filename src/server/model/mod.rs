//! Server-side domain models.
//!
//! Domain models are converted from entity models at the repository boundary, where raw
//! text columns are parsed into typed values, and are transformed into DTOs by the
//! service layer when payloads are assembled.

pub mod driver;
pub mod lap_time;
pub mod position;
pub mod qualifying;
pub mod race;
pub mod result;
