use axum::{ extract::State, Json };
use serde::Serialize;

use crate::db::entity::notification;
use crate::error::Result;

use super::{ AppState, CurrentUser };

pub async fn list_notifications(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser
) -> Result<Json<NotificationsResponse>> {
    let notifications = state.notification_service.list_for_user(&claims.user_id).await?;

    Ok(Json(NotificationsResponse { notifications }))
}

#[derive(Serialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<notification::Model>,
}
