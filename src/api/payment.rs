use axum::{ extract::State, Json };
use serde::{ Deserialize, Serialize };

use crate::error::{ AppError, Result };

use super::AppState;

#[derive(Deserialize)]
pub struct SimulatePaymentRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub deposit_amount: Option<f64>,
}

/// Record a simulated inbound payment. The payer identity is free-form
/// and deliberately not checked against the users table.
pub async fn simulate_payment(
    State(state): State<AppState>,
    Json(request): Json<SimulatePaymentRequest>
) -> Result<Json<PaymentResponse>> {
    let user_id = request.user_id.filter(|v| !v.is_empty());
    let group_id = request.group_id.filter(|v| !v.is_empty());
    let deposit_amount = request.deposit_amount.filter(|v| *v != 0.0);

    let (Some(user_id), Some(group_id), Some(deposit_amount)) =
        (user_id, group_id, deposit_amount) else {
        return Err(AppError::Validation("Missing required fields".to_string()));
    };

    let earnings = state.payment_service
        .record_payment(&user_id, &group_id, deposit_amount).await?;

    Ok(
        Json(PaymentResponse {
            success: true,
            message: "Payment processed".to_string(),
            earnings: format!("{:.2}", earnings),
        })
    )
}

#[derive(Serialize)]
pub struct PaymentResponse {
    pub success: bool,
    pub message: String,
    pub earnings: String,
}
