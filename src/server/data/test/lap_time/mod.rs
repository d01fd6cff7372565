use crate::server::{data::lap_time::LapTimeRepository, model::position::Position};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, fixture::race_weekend};

mod get_by_race;
mod get_fastest_by_race;
