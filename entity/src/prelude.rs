pub use super::circuit::Entity as Circuit;
pub use super::constructor::Entity as Constructor;
pub use super::driver::Entity as Driver;
pub use super::lap_time::Entity as LapTime;
pub use super::qualifying::Entity as Qualifying;
pub use super::race::Entity as Race;
pub use super::result::Entity as RaceResult;
