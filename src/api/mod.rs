use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

pub mod auth;
pub mod upload;
pub mod payment;
pub mod earnings;
pub mod notifications;
pub mod cron;
pub mod testing;

use crate::auth::Claims;
use crate::config::Config;
use crate::error::AppError;
use crate::services::{
    AuthService,
    EarningsService,
    NotificationService,
    PaymentService,
    TestingService,
    UploadService,
};

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub upload_service: Arc<UploadService>,
    pub payment_service: Arc<PaymentService>,
    pub earnings_service: Arc<EarningsService>,
    pub notification_service: Arc<NotificationService>,
    pub testing_service: Arc<TestingService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        auth_service: Arc<AuthService>,
        upload_service: Arc<UploadService>,
        payment_service: Arc<PaymentService>,
        earnings_service: Arc<EarningsService>,
        notification_service: Arc<NotificationService>,
        testing_service: Arc<TestingService>,
        config: Arc<Config>
    ) -> Self {
        Self {
            auth_service,
            upload_service,
            payment_service,
            earnings_service,
            notification_service,
            testing_service,
            config,
        }
    }
}

/// Verified identity claim of the caller, extracted from the bearer
/// token. Handlers that take this reject unauthenticated requests with
/// 401 before any work happens.
pub struct CurrentUser(pub Claims);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts.headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = header_value
            .strip_prefix("Bearer ")
            .or_else(|| header_value.strip_prefix("bearer "))
            .ok_or(AppError::Unauthorized)?;

        let claims = crate::auth::verify_token(token.trim(), &state.config.auth_secret)?;

        Ok(CurrentUser(claims))
    }
}
