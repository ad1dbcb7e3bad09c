use std::sync::Arc;

use sea_orm::{ ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter };
use serde::Serialize;
use uuid::Uuid;

use crate::config::Config;
use crate::db::entity::deposit;
use crate::db::{ EarningRepository, UploadRepository };
use crate::error::Result;
use crate::reward::reward;
use crate::services::payment_service::MEDIATOR_SHARE;
use crate::services::NotificationService;

/// Per-person price charged by the synthetic listing.
const SIMULATED_DEPOSIT: f64 = 0.1;

#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub successful: u32,
    pub failed: u32,
    #[serde(rename = "totalEarnings")]
    pub total_earnings: String,
    #[serde(rename = "successRate")]
    pub success_rate: String,
    #[serde(rename = "numUsers")]
    pub num_users: u32,
}

/// Drives synthetic payment load against a throwaway listing and cleans
/// it up afterwards. Everything it writes is tagged with a per-caller
/// `TEST...` group id so cleanup can find it again.
pub struct TestingService {
    db: DatabaseConnection,
    upload_repo: Arc<UploadRepository>,
    earning_repo: Arc<EarningRepository>,
    notification_service: Arc<NotificationService>,
    config: Arc<Config>,
}

impl TestingService {
    pub fn new(
        db: DatabaseConnection,
        upload_repo: Arc<UploadRepository>,
        earning_repo: Arc<EarningRepository>,
        notification_service: Arc<NotificationService>,
        config: Arc<Config>
    ) -> Self {
        Self {
            db,
            upload_repo,
            earning_repo,
            notification_service,
            config,
        }
    }

    /// Run a bounded sequential loop of simulated payments against the
    /// caller's test listing, creating the listing first if needed.
    pub async fn simulate_payment_flow(
        &self,
        uploader_id: &str,
        num_users: Option<u32>,
        group_id: Option<String>
    ) -> Result<SimulationReport> {
        let num_users = effective_num_users(num_users, self.config.load_test_max_users);
        let group_id = group_id.unwrap_or_else(|| test_group_prefix(uploader_id));

        if self.upload_repo.find_by_group_id(&group_id).await?.is_none() {
            self.upload_repo.create(
                group_id.clone(),
                "General".to_string(),
                SIMULATED_DEPOSIT,
                "per-person".to_string(),
                100,
                reward(100),
                uploader_id.to_string()
            ).await?;
        }

        let mut successful: u32 = 0;
        let mut failed: u32 = 0;
        let mut total_earnings: f64 = 0.0;

        for i in 0..num_users {
            let payer = format!("test_user_{}", i);

            match self.simulate_one(&payer, &group_id, uploader_id).await {
                Ok(earned) => {
                    successful += 1;
                    total_earnings += earned;
                }
                Err(e) => {
                    tracing::warn!("simulated payment {} failed: {}", i, e);
                    failed += 1;
                }
            }
        }

        let success_rate = (successful as f64) / (num_users as f64) * 100.0;

        Ok(SimulationReport {
            successful,
            failed,
            total_earnings: format!("{:.2}", total_earnings),
            success_rate: format!("{:.2}%", success_rate),
            num_users,
        })
    }

    /// One deposit/earning/notification triple, mirroring the live
    /// payment path but tagged with the synthetic payer.
    async fn simulate_one(&self, payer: &str, group_id: &str, uploader_id: &str) -> Result<f64> {
        let mediator_amount = SIMULATED_DEPOSIT * MEDIATOR_SHARE;

        let deposit_row = deposit::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(payer.to_string()),
            deposit_amount: ActiveValue::Set(SIMULATED_DEPOSIT),
            group_id: ActiveValue::Set(group_id.to_string()),
            timestamp: ActiveValue::Set(chrono::Utc::now()),
        };
        deposit_row.insert(&self.db).await?;

        self.earning_repo.create(
            uploader_id.to_string(),
            group_id.to_string(),
            mediator_amount
        ).await?;

        let message = simulation_message(payer, SIMULATED_DEPOSIT, mediator_amount);
        self.notification_service.notify(uploader_id, message).await?;

        Ok(mediator_amount)
    }

    /// Delete everything the simulator wrote for this caller.
    pub async fn clear_test_data(&self, uploader_id: &str) -> Result<()> {
        let prefix = test_group_prefix(uploader_id);

        deposit::Entity
            ::delete_many()
            .filter(deposit::Column::GroupId.starts_with(&prefix))
            .exec(&self.db).await?;

        self.earning_repo.delete_by_prefix(&prefix, uploader_id).await?;
        self.notification_service.delete_payment_alerts(uploader_id).await?;
        self.upload_repo.delete_by_prefix(&prefix, uploader_id).await?;

        Ok(())
    }
}

/// The caller-specific group id the simulator writes under.
fn test_group_prefix(uploader_id: &str) -> String {
    let tail: String = uploader_id
        .chars()
        .rev()
        .take(6)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    format!("TEST{}", tail.to_uppercase())
}

/// Requested payer count, defaulted and clamped to the configured cap.
fn effective_num_users(requested: Option<u32>, cap: u32) -> u32 {
    requested.unwrap_or(100).min(cap)
}

fn simulation_message(payer: &str, deposit_amount: f64, mediator_amount: f64) -> String {
    format!(
        "Payment received: ${:.2} from {}. Your earnings: ${:.2}",
        deposit_amount,
        payer,
        mediator_amount
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ DatabaseBackend, MockDatabase, MockExecResult };

    // `DatabaseConnection` drops its `Clone` derive when the `mock` feature is
    // enabled, but the mock variant is a cheap `Arc` handle to one shared mock
    // queue. This shim hands out additional handles to that same connection so
    // each repository/service sees the same appended results, exactly as a
    // real (cloneable) connection would.
    fn share(db: &DatabaseConnection) -> DatabaseConnection {
        match db {
            DatabaseConnection::MockDatabaseConnection(conn) =>
                DatabaseConnection::MockDatabaseConnection(conn.clone()),
            _ => panic!("test helper expects a mock connection"),
        }
    }

    #[test]
    fn test_group_prefix_uses_last_six_chars_uppercased() {
        assert_eq!(test_group_prefix("5f3a9c1e-22b4-4e8a-9f1d-0a1b2c3d4eff"), "TEST3D4EFF");
        assert_eq!(test_group_prefix("abc"), "TESTABC");
    }

    #[test]
    fn test_num_users_defaults_and_clamps() {
        assert_eq!(effective_num_users(None, 500), 100);
        assert_eq!(effective_num_users(Some(25), 500), 25);
        assert_eq!(effective_num_users(Some(10_000), 500), 500);
    }

    #[test]
    fn test_simulation_message_format() {
        assert_eq!(
            simulation_message("test_user_3", 0.1, 0.09),
            "Payment received: $0.10 from test_user_3. Your earnings: $0.09"
        );
    }

    #[tokio::test]
    async fn test_clear_test_data_touches_all_four_tables() {
        let exec = |rows| MockExecResult { last_insert_id: 0, rows_affected: rows };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(2), exec(2), exec(2), exec(1)])
            .into_connection();

        let service = TestingService::new(
            share(&db),
            Arc::new(UploadRepository::new(share(&db))),
            Arc::new(EarningRepository::new(share(&db))),
            Arc::new(NotificationService::new(db)),
            Arc::new(Config {
                database_url: "postgres://unused".to_string(),
                auth_secret: "test-secret".to_string(),
                token_ttl_days: 7,
                server_host: "127.0.0.1".to_string(),
                server_port: 8080,
                settlement_hold_days: 10,
                load_test_max_users: 500,
            })
        );

        service.clear_test_data("uploader-1").await.unwrap();
    }
}
