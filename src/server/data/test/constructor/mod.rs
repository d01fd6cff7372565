use crate::server::data::constructor::ConstructorRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_names_by_ids;
