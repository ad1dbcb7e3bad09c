use axum::{ extract::State, Json };
use serde::{ Deserialize, Serialize };

use crate::error::Result;
use crate::services::testing_service::SimulationReport;

use super::{ AppState, CurrentUser };

#[derive(Deserialize)]
pub struct SimulateFlowRequest {
    #[serde(default, rename = "numUsers")]
    pub num_users: Option<u32>,
    #[serde(default, rename = "groupId")]
    pub group_id: Option<String>,
}

pub async fn simulate_payment_flow(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser,
    Json(request): Json<SimulateFlowRequest>
) -> Result<Json<SimulateFlowResponse>> {
    let results = state.testing_service.simulate_payment_flow(
        &claims.user_id,
        request.num_users,
        request.group_id
    ).await?;

    Ok(
        Json(SimulateFlowResponse {
            success: true,
            results,
        })
    )
}

pub async fn clear_test_data(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser
) -> Result<Json<ClearTestDataResponse>> {
    state.testing_service.clear_test_data(&claims.user_id).await?;

    Ok(
        Json(ClearTestDataResponse {
            success: true,
            message: "Test data cleared successfully".to_string(),
        })
    )
}

#[derive(Serialize)]
pub struct SimulateFlowResponse {
    pub success: bool,
    pub results: SimulationReport,
}

#[derive(Serialize)]
pub struct ClearTestDataResponse {
    pub success: bool,
    pub message: String,
}
