use axum::{ extract::State, Json };
use serde::Serialize;
use uuid::Uuid;

use crate::db::entity::upload;
use crate::error::Result;
use crate::services::upload_service::{ CreateUploadRequest, UploadOutcome };

use super::{ AppState, CurrentUser };

pub async fn create_upload(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser,
    Json(request): Json<CreateUploadRequest>
) -> Result<Json<UploadResponse>> {
    let outcome = state.upload_service.create_upload(&claims.user_id, request).await?;

    let response = match outcome {
        UploadOutcome::Created { id, tier } =>
            UploadResponse {
                status: "success",
                reward: tier.vxum,
                reward_usd: Some(tier.usd),
                id: Some(id),
            },
        UploadOutcome::Duplicate { reward_vxum } =>
            UploadResponse {
                status: "duplicate",
                reward: reward_vxum,
                reward_usd: None,
                id: None,
            },
    };

    Ok(Json(response))
}

pub async fn list_uploads(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser
) -> Result<Json<UploadsResponse>> {
    let uploads = state.upload_service.list_uploads(&claims.user_id).await?;

    Ok(Json(UploadsResponse { uploads }))
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub status: &'static str,
    pub reward: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_usd: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct UploadsResponse {
    pub uploads: Vec<upload::Model>,
}
