//! SeaORM entities for the historical race database.
//!
//! The schema is owned by the data import and is treated as read-only by the
//! application. Columns that may carry the `\N` missing-value marker from the
//! source dataset are modelled as nullable text and parsed by the server's
//! domain layer.

pub mod prelude;

pub mod circuit;
pub mod constructor;
pub mod driver;
pub mod lap_time;
pub mod qualifying;
pub mod race;
pub mod result;
