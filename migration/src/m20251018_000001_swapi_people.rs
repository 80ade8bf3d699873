use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SwapiPeople::Table)
                    .if_not_exists()
                    .col(integer(SwapiPeople::Id).primary_key())
                    .col(string_null(SwapiPeople::Name))
                    .col(string_null(SwapiPeople::BirthYear))
                    .col(string_null(SwapiPeople::EyeColor))
                    .col(string_null(SwapiPeople::Gender))
                    .col(string_null(SwapiPeople::HairColor))
                    .col(string_null(SwapiPeople::Height))
                    .col(string_null(SwapiPeople::Mass))
                    .col(string_null(SwapiPeople::SkinColor))
                    .col(string_null(SwapiPeople::Homeworld))
                    .col(text(SwapiPeople::Films))
                    .col(text(SwapiPeople::Species))
                    .col(text(SwapiPeople::Starships))
                    .col(text(SwapiPeople::Vehicles))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SwapiPeople::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SwapiPeople {
    Table,
    Id,
    Name,
    BirthYear,
    EyeColor,
    Gender,
    HairColor,
    Height,
    Mass,
    SkinColor,
    Homeworld,
    Films,
    Species,
    Starships,
    Vehicles,
}
