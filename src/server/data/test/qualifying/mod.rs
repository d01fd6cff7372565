use crate::server::data::qualifying::QualifyingRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, fixture::race_weekend};

mod get_by_race;
