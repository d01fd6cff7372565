//! Database repository layer.
//!
//! Repositories issue read-only queries against the race database and convert entity
//! models into domain models. Every repository is generic over `ConnectionTrait` so the
//! same code runs against the connection pool or inside a read transaction.

pub mod constructor;
pub mod lap_time;
pub mod qualifying;
pub mod race;
pub mod result;

#[cfg(test)]
mod test;
