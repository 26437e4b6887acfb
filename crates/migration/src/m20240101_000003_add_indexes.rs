use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Advertisement: id window scans for /getall
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("adv_id_idx")
                    .table(Advertisement::Table)
                    .col(Advertisement::Id)
                    .to_owned(),
            )
            .await?;

        // Advertisement: sort keys
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("adv_price_idx")
                    .table(Advertisement::Table)
                    .col(Advertisement::Price)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("adv_date_idx")
                    .table(Advertisement::Table)
                    .col(Advertisement::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Photos: join on adv_id
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("photos_adv_id_idx")
                    .table(Photos::Table)
                    .col(Photos::AdvId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().if_exists().name("adv_id_idx").table(Advertisement::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().if_exists().name("adv_price_idx").table(Advertisement::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().if_exists().name("adv_date_idx").table(Advertisement::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().if_exists().name("photos_adv_id_idx").table(Photos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Advertisement { Table, Id, Price, CreatedAt }

#[derive(DeriveIden)]
enum Photos { Table, AdvId }
