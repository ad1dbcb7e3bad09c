use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(UserDeposit::Table)
                .if_not_exists()
                .col(ColumnDef::new(UserDeposit::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(UserDeposit::UserId).string().not_null())
                .col(ColumnDef::new(UserDeposit::DepositAmount).double().not_null())
                .col(ColumnDef::new(UserDeposit::GroupId).string().not_null())
                .col(
                    ColumnDef::new(UserDeposit::Timestamp)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_user_deposit_group_id")
                .table(UserDeposit::Table)
                .col(UserDeposit::GroupId)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(UserDeposit::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum UserDeposit {
    Table,
    Id,
    UserId,
    DepositAmount,
    GroupId,
    Timestamp,
}
