use crate::server::{
    error::AppError,
    service::{race::RaceService, summary::RaceSummaryService},
};
use test_utils::{builder::TestBuilder, factory, fixture::race_weekend};
