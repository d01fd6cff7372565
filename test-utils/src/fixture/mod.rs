//! Seeded multi-table scenarios.
//!
//! Fixtures insert a complete, known data set so tests can assert exact aggregate
//! values without repeating the setup. Each fixture documents the values it seeds.

pub mod race_weekend;
