//! Create `advertisement` table.
//!
//! Non-empty text and positive price are enforced by CHECK constraints as well
//! as by request validation.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Advertisement::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Advertisement::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        string_len(Advertisement::Name, 200)
                            .not_null()
                            .check(Expr::col(Advertisement::Name).ne("")),
                    )
                    .col(
                        string_len(Advertisement::Description, 1000)
                            .not_null()
                            .check(Expr::col(Advertisement::Description).ne("")),
                    )
                    .col(
                        decimal_len(Advertisement::Price, 16, 2)
                            .not_null()
                            .check(Expr::col(Advertisement::Price).gt(0)),
                    )
                    .col(
                        date(Advertisement::CreatedAt)
                            .not_null()
                            .default(Expr::current_date()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Advertisement::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Advertisement { Table, Id, Name, Description, Price, CreatedAt }
