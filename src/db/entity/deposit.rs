use sea_orm::entity::prelude::*;
use serde::{ Deserialize, Serialize };

/// One simulated inbound payment. Append-only; `user_id` is the payer's
/// free-form identity and is not checked against the users table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_deposit")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: String,
    pub deposit_amount: f64,
    pub group_id: String,
    pub timestamp: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
