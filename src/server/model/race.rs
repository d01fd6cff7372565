//! Domain models for races and their circuits.

use chrono::NaiveDate;

use crate::model::race::RaceDto;

/// A race as stored in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Race {
    pub id: i32,
    pub year: i32,
    pub round: i32,
    pub circuit_id: i32,
    pub name: String,
    pub date: Option<NaiveDate>,
    pub url: Option<String>,
}

impl Race {
    /// Converts an entity model to the race domain model.
    pub fn from_entity(entity: entity::race::Model) -> Self {
        Self {
            id: entity.id,
            year: entity.year,
            round: entity.round,
            circuit_id: entity.circuit_id,
            name: entity.name,
            date: entity.date,
            url: entity.url,
        }
    }

    pub fn into_dto(self) -> RaceDto {
        RaceDto {
            id: self.id,
            year: self.year,
            round: self.round,
            circuit_id: self.circuit_id,
            name: self.name,
            date: self.date,
            url: self.url,
        }
    }
}

/// Race metadata joined with the circuit it is held at.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceWithCircuit {
    pub race: Race,
    pub circuit_name: String,
    pub location: Option<String>,
}

impl RaceWithCircuit {
    pub fn from_entity(race: entity::race::Model, circuit: entity::circuit::Model) -> Self {
        Self {
            race: Race::from_entity(race),
            circuit_name: circuit.name,
            location: circuit.location,
        }
    }
}
