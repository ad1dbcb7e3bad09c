use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(GroupUploaded::Table)
                .if_not_exists()
                .col(ColumnDef::new(GroupUploaded::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(GroupUploaded::GroupId).string().not_null())
                .col(ColumnDef::new(GroupUploaded::Category).string().not_null())
                .col(ColumnDef::new(GroupUploaded::Price).double().not_null())
                .col(ColumnDef::new(GroupUploaded::PricingMode).string().not_null())
                .col(ColumnDef::new(GroupUploaded::MemberCount).integer().not_null())
                .col(ColumnDef::new(GroupUploaded::RewardVxum).integer().not_null())
                .col(ColumnDef::new(GroupUploaded::RewardUsd).integer().not_null())
                .col(ColumnDef::new(GroupUploaded::UploaderId).string().not_null())
                .col(
                    ColumnDef::new(GroupUploaded::Timestamp)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .to_owned()
        ).await?;

        // group_id is the human-facing key; one listing per group
        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_group_uploaded_group_id")
                .table(GroupUploaded::Table)
                .col(GroupUploaded::GroupId)
                .unique()
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_group_uploaded_uploader")
                .table(GroupUploaded::Table)
                .col(GroupUploaded::UploaderId)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(GroupUploaded::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum GroupUploaded {
    Table,
    Id,
    GroupId,
    Category,
    Price,
    PricingMode,
    MemberCount,
    RewardVxum,
    RewardUsd,
    UploaderId,
    Timestamp,
}
