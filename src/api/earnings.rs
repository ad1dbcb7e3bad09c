use axum::{ extract::State, Json };
use serde::Serialize;

use crate::db::entity::earning;
use crate::error::Result;
use crate::services::earnings_service::Totals;

use super::{ AppState, CurrentUser };

pub async fn list_earnings(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser
) -> Result<Json<EarningsResponse>> {
    let (earnings, totals) = state.earnings_service.overview(&claims.user_id).await?;

    Ok(Json(EarningsResponse { earnings, totals }))
}

#[derive(Serialize)]
pub struct EarningsResponse {
    pub earnings: Vec<earning::Model>,
    pub totals: Totals,
}
