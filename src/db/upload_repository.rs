use sea_orm::{ ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set };
use uuid::Uuid;

use crate::db::entity::upload;
use crate::error::Result;
use crate::reward::RewardTier;

pub struct UploadRepository {
    db: DatabaseConnection,
}

impl UploadRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        group_id: String,
        category: String,
        price: f64,
        pricing_mode: String,
        member_count: i32,
        tier: RewardTier,
        uploader_id: String
    ) -> Result<upload::Model> {
        let listing = upload::ActiveModel {
            id: Set(Uuid::new_v4()),
            group_id: Set(group_id),
            category: Set(category),
            price: Set(price),
            pricing_mode: Set(pricing_mode),
            member_count: Set(member_count),
            reward_vxum: Set(tier.vxum),
            reward_usd: Set(tier.usd),
            uploader_id: Set(uploader_id),
            timestamp: Set(chrono::Utc::now()),
        };

        let listing = listing.insert(&self.db).await?;
        Ok(listing)
    }

    pub async fn find_by_group_id(&self, group_id: &str) -> Result<Option<upload::Model>> {
        let listing = upload::Entity
            ::find()
            .filter(upload::Column::GroupId.eq(group_id))
            .one(&self.db).await?;

        Ok(listing)
    }

    /// Most recent listings of one uploader.
    pub async fn list_by_uploader(
        &self,
        uploader_id: &str,
        limit: u64
    ) -> Result<Vec<upload::Model>> {
        let listings = upload::Entity
            ::find()
            .filter(upload::Column::UploaderId.eq(uploader_id))
            .order_by_desc(upload::Column::Timestamp)
            .limit(limit)
            .all(&self.db).await?;

        Ok(listings)
    }

    /// Remove listings the load simulator created for this uploader.
    pub async fn delete_by_prefix(&self, group_id_prefix: &str, uploader_id: &str) -> Result<u64> {
        let result = upload::Entity
            ::delete_many()
            .filter(upload::Column::GroupId.starts_with(group_id_prefix))
            .filter(upload::Column::UploaderId.eq(uploader_id))
            .exec(&self.db).await?;

        Ok(result.rows_affected)
    }
}
