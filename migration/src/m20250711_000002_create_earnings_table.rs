use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(Earnings::Table)
                .if_not_exists()
                .col(ColumnDef::new(Earnings::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Earnings::UploaderId).string().not_null())
                .col(ColumnDef::new(Earnings::GroupId).string().not_null())
                .col(ColumnDef::new(Earnings::Amount).double().not_null())
                .col(ColumnDef::new(Earnings::Status).string().not_null())
                .col(
                    ColumnDef::new(Earnings::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .col(ColumnDef::new(Earnings::PaidAt).timestamp_with_time_zone().null())
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_earnings_uploader")
                .table(Earnings::Table)
                .col(Earnings::UploaderId)
                .to_owned()
        ).await?;

        // The settlement sweep filters on (status, created_at)
        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_earnings_status_created")
                .table(Earnings::Table)
                .col(Earnings::Status)
                .col(Earnings::CreatedAt)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Earnings::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Earnings {
    Table,
    Id,
    UploaderId,
    GroupId,
    Amount,
    Status,
    CreatedAt,
    PaidAt,
}
