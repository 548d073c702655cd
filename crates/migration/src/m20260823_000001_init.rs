//! Initial schema migration - creates all tables from scratch.
//!
//! It creates the complete schema for Starlog:
//!
//! - `users`: accounts created via sign-up
//! - `characters`: read-only reference data
//! - `planets`: read-only reference data
//! - `favorites`: user favorites, each pointing at one character or planet
//!
//! The unique index on `users.email` and the unique `(user_id, target)`
//! indexes on `favorites` enforce at the storage layer what the engine also
//! pre-checks inside its transactions.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    Password,
    IsActive,
}

#[derive(Iden)]
enum Characters {
    Table,
    Id,
    Name,
    Gender,
    BirthYear,
    EyeColor,
    HairColor,
}

#[derive(Iden)]
enum Planets {
    Table,
    Id,
    Name,
    Climate,
    Terrain,
    Population,
    DiameterKm,
}

#[derive(Iden)]
enum Favorites {
    Table,
    Id,
    UserId,
    CharacterId,
    PlanetId,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Users
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Username).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::Password).string().not_null())
                    .col(ColumnDef::new(Users::IsActive).boolean().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-users-email-unique")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Characters
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Characters::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Characters::Name).string().not_null())
                    .col(ColumnDef::new(Characters::Gender).string())
                    .col(ColumnDef::new(Characters::BirthYear).string())
                    .col(ColumnDef::new(Characters::EyeColor).string())
                    .col(ColumnDef::new(Characters::HairColor).string())
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 3. Planets
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Planets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Planets::Name).string().not_null())
                    .col(ColumnDef::new(Planets::Climate).string())
                    .col(ColumnDef::new(Planets::Terrain).string())
                    .col(ColumnDef::new(Planets::Population).big_integer())
                    .col(ColumnDef::new(Planets::DiameterKm).integer())
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 4. Favorites
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Favorites::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Favorites::UserId).integer().not_null())
                    .col(ColumnDef::new(Favorites::CharacterId).integer())
                    .col(ColumnDef::new(Favorites::PlanetId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-favorites-user_id")
                            .from(Favorites::Table, Favorites::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-favorites-character_id")
                            .from(Favorites::Table, Favorites::CharacterId)
                            .to(Characters::Table, Characters::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-favorites-planet_id")
                            .from(Favorites::Table, Favorites::PlanetId)
                            .to(Planets::Table, Planets::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // One favorite per (user, character) and per (user, planet). The
        // nullable target column keeps rows of the other kind out of each
        // index.
        manager
            .create_index(
                Index::create()
                    .name("idx-favorites-user_id-character_id-unique")
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::CharacterId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-favorites-user_id-planet_id-unique")
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::PlanetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-favorites-user_id")
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse order of creation (respecting FK dependencies)
        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Characters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}
