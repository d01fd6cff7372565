use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::collections::HashMap;

pub struct ConstructorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConstructorRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets constructor names for a set of IDs in one query
    ///
    /// # Arguments
    /// - `ids`: Constructor IDs, duplicates allowed
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, String>)`: Map of constructor ID to name; unknown IDs are absent
    /// - `Err(DbErr)`: Database error
    pub async fn get_names_by_ids(
        &self,
        ids: impl IntoIterator<Item = i32>,
    ) -> Result<HashMap<i32, String>, DbErr> {
        let mut ids: Vec<i32> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let constructors = entity::prelude::Constructor::find()
            .filter(entity::constructor::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(constructors.into_iter().map(|c| (c.id, c.name)).collect())
    }
}
