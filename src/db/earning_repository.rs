use chrono::{ DateTime, Utc };
use sea_orm::sea_query::Expr;
use sea_orm::{ ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set };
use uuid::Uuid;

use crate::db::entity::earning;
use crate::enums::EarningStatus;
use crate::error::Result;

pub struct EarningRepository {
    db: DatabaseConnection,
}

impl EarningRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Append one pending ledger entry.
    pub async fn create(
        &self,
        uploader_id: String,
        group_id: String,
        amount: f64
    ) -> Result<earning::Model> {
        let entry = earning::ActiveModel {
            id: Set(Uuid::new_v4()),
            uploader_id: Set(uploader_id),
            group_id: Set(group_id),
            amount: Set(amount),
            status: Set(EarningStatus::Pending.as_str().to_string()),
            created_at: Set(Utc::now()),
            paid_at: Set(None),
        };

        let entry = entry.insert(&self.db).await?;
        Ok(entry)
    }

    /// Most recent ledger entries of one uploader.
    pub async fn list_by_uploader(
        &self,
        uploader_id: &str,
        limit: u64
    ) -> Result<Vec<earning::Model>> {
        let entries = earning::Entity
            ::find()
            .filter(earning::Column::UploaderId.eq(uploader_id))
            .order_by_desc(earning::Column::CreatedAt)
            .limit(limit)
            .all(&self.db).await?;

        Ok(entries)
    }

    /// Promote every pending entry created at or before `cutoff` to paid,
    /// stamping `paid_at` with the sweep time. A single conditional
    /// multi-row UPDATE, so concurrent sweeps cannot double-settle a row.
    pub async fn settle_pending(&self, cutoff: DateTime<Utc>) -> Result<u64> {
        let now = Utc::now();

        let result = earning::Entity
            ::update_many()
            .col_expr(earning::Column::Status, Expr::value(EarningStatus::Paid.as_str()))
            .col_expr(earning::Column::PaidAt, Expr::value(Some(now)))
            .filter(earning::Column::Status.eq(EarningStatus::Pending.as_str()))
            .filter(earning::Column::CreatedAt.lte(cutoff))
            .exec(&self.db).await?;

        Ok(result.rows_affected)
    }

    /// Remove ledger entries the load simulator created for this uploader.
    pub async fn delete_by_prefix(&self, group_id_prefix: &str, uploader_id: &str) -> Result<u64> {
        let result = earning::Entity
            ::delete_many()
            .filter(earning::Column::GroupId.starts_with(group_id_prefix))
            .filter(earning::Column::UploaderId.eq(uploader_id))
            .exec(&self.db).await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ DatabaseBackend, MockDatabase, MockExecResult };

    // `DatabaseConnection` drops its `Clone` derive when the `mock` feature is
    // enabled, but the mock variant is a cheap `Arc` handle to one shared mock
    // queue/log. This shim hands out an additional handle to that same
    // connection, exactly as a real (cloneable) connection would.
    fn share(db: &DatabaseConnection) -> DatabaseConnection {
        match db {
            DatabaseConnection::MockDatabaseConnection(conn) =>
                DatabaseConnection::MockDatabaseConnection(conn.clone()),
            _ => panic!("test helper expects a mock connection"),
        }
    }

    #[tokio::test]
    async fn test_settle_pending_is_one_conditional_update() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 2,
            }])
            .into_connection();

        let repo = EarningRepository::new(share(&db));
        let cutoff = Utc::now() - chrono::Duration::days(10);
        let count = repo.settle_pending(cutoff).await.unwrap();

        assert_eq!(count, 2);

        // One statement, filtered on both status and age; rows either
        // settle in it or stay pending, never half-updated.
        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let statement = format!("{:?}", log[0]);
        assert!(statement.contains("UPDATE"));
        assert!(statement.contains("status"));
        assert!(statement.contains("created_at"));
    }
}
