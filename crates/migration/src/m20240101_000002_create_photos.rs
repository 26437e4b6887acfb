//! Create `photos` table.
//! Each row is one opaque link owned by an advertisement; rows go away with
//! their advertisement.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Photos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Photos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(big_integer(Photos::AdvId).not_null())
                    .col(text(Photos::Link).not_null().check(Expr::col(Photos::Link).ne("")))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_photos_advertisement")
                            .from(Photos::Table, Photos::AdvId)
                            .to(Advertisement::Table, Advertisement::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Photos::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Photos { Table, Id, AdvId, Link }

#[derive(DeriveIden)]
enum Advertisement { Table, Id }
