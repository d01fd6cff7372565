use crate::server::{data::result::ResultRepository, model::position::Position};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, fixture::race_weekend};

mod get_by_race;
