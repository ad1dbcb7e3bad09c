use sea_orm::{
    ActiveModelTrait,
    ActiveValue,
    ColumnTrait,
    DatabaseConnection,
    EntityTrait,
    QueryFilter,
    QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

use crate::db::entity::notification;
use crate::error::Result;

/// How many feed rows a single fetch returns.
const NOTIFICATIONS_WINDOW: u64 = 25;

#[derive(Clone)]
pub struct NotificationService {
    db: DatabaseConnection,
}

impl NotificationService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Append one alert for the recipient. Fire-and-forget from the
    /// caller's point of view; there is no delivery or retry semantic.
    pub async fn notify(&self, recipient: &str, message: String) -> Result<notification::Model> {
        let row = notification::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            message: ActiveValue::Set(message),
            temp_id: ActiveValue::Set(recipient.to_string()),
            timestamp: ActiveValue::Set(chrono::Utc::now()),
        };

        let row = row.insert(&self.db).await?;
        Ok(row)
    }

    /// Most recent alerts addressed to the recipient.
    pub async fn list_for_user(&self, recipient: &str) -> Result<Vec<notification::Model>> {
        let rows = notification::Entity
            ::find()
            .filter(notification::Column::TempId.eq(recipient))
            .order_by_desc(notification::Column::Timestamp)
            .limit(NOTIFICATIONS_WINDOW)
            .all(&self.db).await?;

        Ok(rows)
    }

    /// Remove the simulator's "Payment received" alerts for one recipient.
    pub async fn delete_payment_alerts(&self, recipient: &str) -> Result<u64> {
        let result = notification::Entity
            ::delete_many()
            .filter(notification::Column::TempId.eq(recipient))
            .filter(notification::Column::Message.starts_with("Payment received"))
            .exec(&self.db).await?;

        Ok(result.rows_affected)
    }
}
