use axum::{ extract::State, Json };
use serde::Serialize;

use crate::error::Result;
use crate::services::auth_service::{ AuthResponse, LoginRequest, RegisterRequest, UserResponse };

use super::{ AppState, CurrentUser };

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>
) -> Result<Json<AuthResponse>> {
    let response = state.auth_service.register(request).await?;

    Ok(Json(response))
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>
) -> Result<Json<AuthResponse>> {
    let response = state.auth_service.login(request).await?;

    Ok(Json(response))
}

pub async fn me(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser
) -> Result<Json<MeResponse>> {
    let user = state.auth_service.me(&claims.user_id).await?;

    Ok(Json(MeResponse { user }))
}

/// Tokens are held client-side; there is no server session to tear down.
pub async fn logout() -> Json<LogoutResponse> {
    Json(LogoutResponse { success: true })
}

#[derive(Serialize)]
pub struct MeResponse {
    pub user: UserResponse,
}

#[derive(Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}
