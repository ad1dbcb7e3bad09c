use std::sync::Arc;

use chrono::{ Duration, Utc };
use serde::Serialize;

use crate::db::entity::earning;
use crate::db::EarningRepository;
use crate::enums::EarningStatus;
use crate::error::Result;

/// How many ledger rows a single fetch returns. Totals are computed over
/// this window, not the full history, so a prolific uploader's lifetime
/// figures are understated once they pass it.
const EARNINGS_WINDOW: u64 = 100;

/// Presentation sums, pre-formatted to two decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub pending: String,
    pub paid: String,
    pub total: String,
}

pub struct EarningsService {
    earning_repo: Arc<EarningRepository>,
}

impl EarningsService {
    pub fn new(earning_repo: Arc<EarningRepository>) -> Self {
        Self { earning_repo }
    }

    /// The uploader's recent ledger window plus its per-status sums.
    pub async fn overview(&self, uploader_id: &str) -> Result<(Vec<earning::Model>, Totals)> {
        let entries = self.earning_repo.list_by_uploader(uploader_id, EARNINGS_WINDOW).await?;
        let totals = compute_totals(&entries);

        Ok((entries, totals))
    }

    /// Settle every pending entry older than `older_than`. Returns how
    /// many rows moved to paid; a second immediate sweep settles zero.
    pub async fn settle_pending(&self, older_than: Duration) -> Result<u64> {
        let cutoff = Utc::now() - older_than;
        let count = self.earning_repo.settle_pending(cutoff).await?;

        if count > 0 {
            tracing::info!("settled {} pending earnings", count);
        }

        Ok(count)
    }
}

/// Sum the fetched window by status.
pub fn compute_totals(entries: &[earning::Model]) -> Totals {
    let pending: f64 = entries
        .iter()
        .filter(|e| e.status == EarningStatus::Pending.as_str())
        .map(|e| e.amount)
        .sum();

    let paid: f64 = entries
        .iter()
        .filter(|e| e.status == EarningStatus::Paid.as_str())
        .map(|e| e.amount)
        .sum();

    Totals {
        pending: format!("{:.2}", pending),
        paid: format!("{:.2}", paid),
        total: format!("{:.2}", pending + paid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ DatabaseBackend, MockDatabase, MockExecResult };
    use uuid::Uuid;

    fn entry(amount: f64, status: EarningStatus) -> earning::Model {
        earning::Model {
            id: Uuid::new_v4(),
            uploader_id: "uploader-1".to_string(),
            group_id: "CRYPTO2024".to_string(),
            amount,
            status: status.as_str().to_string(),
            created_at: Utc::now(),
            paid_at: None,
        }
    }

    #[test]
    fn test_totals_sum_by_status() {
        let entries = vec![entry(9.0, EarningStatus::Pending), entry(5.0, EarningStatus::Paid)];

        let totals = compute_totals(&entries);

        assert_eq!(totals.pending, "9.00");
        assert_eq!(totals.paid, "5.00");
        assert_eq!(totals.total, "14.00");
    }

    #[test]
    fn test_totals_of_empty_window_are_zero() {
        let totals = compute_totals(&[]);

        assert_eq!(totals.pending, "0.00");
        assert_eq!(totals.paid, "0.00");
        assert_eq!(totals.total, "0.00");
    }

    #[test]
    fn test_totals_round_to_two_decimals() {
        let entries = vec![
            entry(0.09, EarningStatus::Pending),
            entry(0.09, EarningStatus::Pending),
            entry(0.09, EarningStatus::Pending)
        ];

        let totals = compute_totals(&entries);

        assert_eq!(totals.pending, "0.27");
        assert_eq!(totals.total, "0.27");
    }

    #[tokio::test]
    async fn test_settle_pending_reports_affected_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 3,
            }])
            .into_connection();

        let service = EarningsService::new(Arc::new(EarningRepository::new(db)));
        let count = service.settle_pending(Duration::days(10)).await.unwrap();

        assert_eq!(count, 3);
    }

    #[tokio::test]
    async fn test_settle_pending_is_idempotent_when_nothing_is_due() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let service = EarningsService::new(Arc::new(EarningRepository::new(db)));
        let count = service.settle_pending(Duration::days(10)).await.unwrap();

        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_overview_returns_window_and_totals() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                vec![entry(9.0, EarningStatus::Pending), entry(5.0, EarningStatus::Paid)],
            ])
            .into_connection();

        let service = EarningsService::new(Arc::new(EarningRepository::new(db)));
        let (entries, totals) = service.overview("uploader-1").await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(totals.total, "14.00");
    }
}
