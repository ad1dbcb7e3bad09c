use std::sync::Arc;

use sea_orm::{ ActiveModelTrait, ActiveValue, DatabaseConnection };
use uuid::Uuid;

use crate::db::entity::deposit;
use crate::db::{ EarningRepository, UploadRepository };
use crate::error::{ AppError, Result };
use crate::services::NotificationService;

/// The uploader's cut of every deposit. The product copy describes this
/// as "70% base + 20% commission"; the ledger applies it as one flat
/// multiplier and never accounts for the two parts separately.
pub const MEDIATOR_SHARE: f64 = 0.9;

pub struct PaymentService {
    db: DatabaseConnection,
    upload_repo: Arc<UploadRepository>,
    earning_repo: Arc<EarningRepository>,
    notification_service: Arc<NotificationService>,
}

impl PaymentService {
    pub fn new(
        db: DatabaseConnection,
        upload_repo: Arc<UploadRepository>,
        earning_repo: Arc<EarningRepository>,
        notification_service: Arc<NotificationService>
    ) -> Self {
        Self {
            db,
            upload_repo,
            earning_repo,
            notification_service,
        }
    }

    /// Record one inbound payment against a listed group: a deposit row,
    /// a pending ledger entry for the uploader's share, and an alert to
    /// the uploader. The three writes are sequential and not wrapped in a
    /// transaction; a fault mid-sequence leaves the earlier rows in place.
    /// Returns the uploader's share.
    pub async fn record_payment(
        &self,
        payer: &str,
        group_id: &str,
        amount: f64
    ) -> Result<f64> {
        let listing = self.upload_repo
            .find_by_group_id(group_id).await?
            .ok_or_else(|| AppError::NotFound("Group not found".to_string()))?;

        let mediator_amount = amount * MEDIATOR_SHARE;

        let deposit_row = deposit::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(payer.to_string()),
            deposit_amount: ActiveValue::Set(amount),
            group_id: ActiveValue::Set(group_id.to_string()),
            timestamp: ActiveValue::Set(chrono::Utc::now()),
        };
        deposit_row.insert(&self.db).await?;

        self.earning_repo.create(
            listing.uploader_id.clone(),
            group_id.to_string(),
            mediator_amount
        ).await?;

        let message = payment_message(group_id, amount, mediator_amount);
        self.notification_service.notify(&listing.uploader_id, message).await?;

        tracing::debug!(
            "recorded payment of ${:.2} against group {} (uploader share ${:.2})",
            amount,
            group_id,
            mediator_amount
        );

        Ok(mediator_amount)
    }
}

fn payment_message(group_id: &str, deposit_amount: f64, mediator_amount: f64) -> String {
    format!(
        "Payment received: ${:.2} for group {}. Your earnings: ${:.2}",
        deposit_amount,
        group_id,
        mediator_amount
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ DatabaseBackend, MockDatabase };

    use crate::db::entity::{ earning, notification, upload };
    use crate::enums::EarningStatus;

    fn listing(group_id: &str, uploader_id: &str) -> upload::Model {
        upload::Model {
            id: Uuid::new_v4(),
            group_id: group_id.to_string(),
            category: "General".to_string(),
            price: 0.1,
            pricing_mode: "per-person".to_string(),
            member_count: 100,
            reward_vxum: 5,
            reward_usd: 1,
            uploader_id: uploader_id.to_string(),
            timestamp: chrono::Utc::now(),
        }
    }

    // `DatabaseConnection` drops its `Clone` derive when the `mock` feature is
    // enabled, but the mock variant is a cheap `Arc` handle to one shared mock
    // queue. This shim hands out additional handles to that same connection so
    // each repository/service sees the same appended results, exactly as a
    // real (cloneable) connection would.
    fn share(db: &sea_orm::DatabaseConnection) -> sea_orm::DatabaseConnection {
        match db {
            sea_orm::DatabaseConnection::MockDatabaseConnection(conn) =>
                sea_orm::DatabaseConnection::MockDatabaseConnection(conn.clone()),
            _ => panic!("test helper expects a mock connection"),
        }
    }

    fn service(db: sea_orm::DatabaseConnection) -> PaymentService {
        PaymentService::new(
            share(&db),
            Arc::new(UploadRepository::new(share(&db))),
            Arc::new(EarningRepository::new(share(&db))),
            Arc::new(NotificationService::new(db))
        )
    }

    #[tokio::test]
    async fn test_record_payment_unknown_group_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<upload::Model>::new()])
            .into_connection();

        let err = service(db)
            .record_payment("payer-1", "UNKNOWNID", 1.0).await
            .unwrap_err();

        match err {
            AppError::NotFound(message) => assert_eq!(message, "Group not found"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_record_payment_writes_deposit_earning_and_alert() {
        let now = chrono::Utc::now();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // group lookup
            .append_query_results([vec![listing("CRYPTO2024", "uploader-1")]])
            // deposit insert
            .append_query_results([
                vec![deposit::Model {
                    id: Uuid::new_v4(),
                    user_id: "payer-1".to_string(),
                    deposit_amount: 10.0,
                    group_id: "CRYPTO2024".to_string(),
                    timestamp: now,
                }],
            ])
            // earning insert
            .append_query_results([
                vec![earning::Model {
                    id: Uuid::new_v4(),
                    uploader_id: "uploader-1".to_string(),
                    group_id: "CRYPTO2024".to_string(),
                    amount: 9.0,
                    status: EarningStatus::Pending.as_str().to_string(),
                    created_at: now,
                    paid_at: None,
                }],
            ])
            // notification insert
            .append_query_results([
                vec![notification::Model {
                    id: Uuid::new_v4(),
                    message: payment_message("CRYPTO2024", 10.0, 9.0),
                    temp_id: "uploader-1".to_string(),
                    timestamp: now,
                }],
            ])
            .into_connection();

        let mediator_amount = service(db)
            .record_payment("payer-1", "CRYPTO2024", 10.0).await
            .unwrap();

        assert!((mediator_amount - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_payment_message_mentions_both_amounts() {
        let message = payment_message("CRYPTO2024", 10.0, 9.0);

        assert_eq!(
            message,
            "Payment received: $10.00 for group CRYPTO2024. Your earnings: $9.00"
        );
    }

    #[test]
    fn test_mediator_share_is_a_flat_multiplier() {
        assert!((10.0_f64 * MEDIATOR_SHARE - 9.0).abs() < f64::EPSILON);
        assert!((0.1_f64 * MEDIATOR_SHARE - 0.09).abs() < 1e-12);
    }
}
