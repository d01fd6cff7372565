/// Display names of a driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverName {
    pub forename: String,
    pub surname: String,
}

impl DriverName {
    pub fn from_entity(entity: entity::driver::Model) -> Self {
        Self {
            forename: entity.forename,
            surname: entity.surname,
        }
    }

    /// Forename and surname separated by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.forename, self.surname)
    }
}

/// Name used when a row references a driver that does not exist.
pub const UNKNOWN_DRIVER: &str = "Unknown";

/// Full name of an optional driver, falling back to [`UNKNOWN_DRIVER`].
pub fn full_name_or_unknown(driver: Option<&DriverName>) -> String {
    driver
        .map(DriverName::full_name)
        .unwrap_or_else(|| UNKNOWN_DRIVER.to_string())
}
