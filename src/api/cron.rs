use axum::{ extract::State, Json };
use chrono::Duration;
use serde::Serialize;

use crate::error::Result;

use super::AppState;

/// Settlement sweep, invoked by an external scheduler (or by hand).
/// Stateless and idempotent: a second immediate call settles zero rows.
pub async fn settle_earnings(State(state): State<AppState>) -> Result<Json<SettleResponse>> {
    let count = state.earnings_service
        .settle_pending(Duration::days(state.config.settlement_hold_days)).await?;

    Ok(
        Json(SettleResponse {
            success: true,
            message: format!("Settled {} earnings", count),
            count,
        })
    )
}

#[derive(Serialize)]
pub struct SettleResponse {
    pub success: bool,
    pub message: String,
    pub count: u64,
}
