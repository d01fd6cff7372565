use crate::server::data::race::RaceRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod get_by_id;
mod get_with_circuit;
