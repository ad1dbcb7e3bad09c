use sea_orm::entity::prelude::*;
use serde::{ Deserialize, Serialize };

/// One ledger entry: the uploader's 90% share of a deposit. `status`
/// only ever moves pending -> paid, and `paid_at` is set at that moment.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "earnings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub uploader_id: String,
    pub group_id: String,
    pub amount: f64,
    pub status: String, // "pending", "paid"
    pub created_at: DateTimeUtc,
    pub paid_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
