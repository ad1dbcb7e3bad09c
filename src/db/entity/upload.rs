use sea_orm::entity::prelude::*;
use serde::{ Deserialize, Serialize };

/// One listed group. Immutable after creation; the reward columns are
/// assigned exactly once, from the member-count band at insert time.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "group_uploaded")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub group_id: String,
    pub category: String,
    pub price: f64,
    pub pricing_mode: String, // "per-person", "per-group"
    pub member_count: i32,
    pub reward_vxum: i32,
    pub reward_usd: i32,
    pub uploader_id: String,
    pub timestamp: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
