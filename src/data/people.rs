use async_trait::async_trait;
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    sea_query::Table, ActiveValue, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    TransactionTrait,
};

use crate::{data::PersistenceSink, model::record::FlatRecord};

/// SeaORM repository for the `swapi_people` table.
///
/// Owns a handle to the connection pool so it can be shared with detached chunk tasks.
#[derive(Clone, Debug)]
pub struct PeopleRepository {
    db: DatabaseConnection,
}

impl PeopleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetch every stored person ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::swapi_people::Model>, DbErr> {
        use sea_orm::QueryOrder;

        entity::prelude::SwapiPeople::find()
            .order_by_asc(entity::swapi_people::Column::Id)
            .all(&self.db)
            .await
    }
}

#[async_trait]
impl PersistenceSink for PeopleRepository {
    /// Drop and recreate the `swapi_people` table, leaving every other table untouched.
    async fn reset(&self) -> Result<(), DbErr> {
        // Reverts the applied migrations, dropping the table when it was migrated
        Migrator::down(&self.db, None).await?;

        // The table may also exist without migration history
        let drop = Table::drop()
            .table(entity::prelude::SwapiPeople)
            .if_exists()
            .to_owned();
        self.db.execute(&drop).await?;

        Migrator::up(&self.db, None).await
    }

    async fn insert_batch(&self, records: Vec<FlatRecord>) -> Result<u64, DbErr> {
        if records.is_empty() {
            return Ok(0);
        }

        let people = records
            .into_iter()
            .map(|r| entity::swapi_people::ActiveModel {
                id: ActiveValue::Set(r.id),
                name: ActiveValue::Set(r.name),
                birth_year: ActiveValue::Set(r.birth_year),
                eye_color: ActiveValue::Set(r.eye_color),
                gender: ActiveValue::Set(r.gender),
                hair_color: ActiveValue::Set(r.hair_color),
                height: ActiveValue::Set(r.height),
                mass: ActiveValue::Set(r.mass),
                skin_color: ActiveValue::Set(r.skin_color),
                homeworld: ActiveValue::Set(r.homeworld),
                films: ActiveValue::Set(r.films),
                species: ActiveValue::Set(r.species),
                starships: ActiveValue::Set(r.starships),
                vehicles: ActiveValue::Set(r.vehicles),
            });

        let txn = self.db.begin().await?;

        let inserted = entity::prelude::SwapiPeople::insert_many(people)
            .exec_with_returning(&txn)
            .await?;

        txn.commit().await?;

        Ok(inserted.len() as u64)
    }
}
