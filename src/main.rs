use mediator_channel::{ Config, Result };
use axum::{ Router, routing::{ get, post } };
use migration::MigratorTrait;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{ layer::SubscriberExt, util::SubscriberInitExt };

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber
        ::registry()
        .with(
            tracing_subscriber::EnvFilter
                ::try_from_default_env()
                .unwrap_or_else(|_| "mediator_channel=debug,tower_http=debug".into())
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| mediator_channel::AppError::Config(e.to_string()))?;

    tracing::info!("Starting mediator-channel on {}:{}", config.server_host, config.server_port);

    // Initialize database connection
    let db = sea_orm::Database
        ::connect(&config.database_url).await
        .map_err(mediator_channel::AppError::Database)?;

    tracing::info!("Database connected successfully");

    // Run migrations
    migration::Migrator::up(&db, None).await.map_err(mediator_channel::AppError::Database)?;

    tracing::info!("Migrations completed successfully");

    let config = Arc::new(config);

    // Initialize repositories
    let user_repo = Arc::new(mediator_channel::db::UserRepository::new(db.clone()));
    let upload_repo = Arc::new(mediator_channel::db::UploadRepository::new(db.clone()));
    let earning_repo = Arc::new(mediator_channel::db::EarningRepository::new(db.clone()));

    // Initialize services
    let notification_service = Arc::new(
        mediator_channel::services::NotificationService::new(db.clone())
    );

    let auth_service = Arc::new(
        mediator_channel::services::AuthService::new(user_repo.clone(), config.clone())
    );

    let upload_service = Arc::new(
        mediator_channel::services::UploadService::new(upload_repo.clone())
    );

    let payment_service = Arc::new(
        mediator_channel::services::PaymentService::new(
            db.clone(),
            upload_repo.clone(),
            earning_repo.clone(),
            notification_service.clone()
        )
    );

    let earnings_service = Arc::new(
        mediator_channel::services::EarningsService::new(earning_repo.clone())
    );

    let testing_service = Arc::new(
        mediator_channel::services::TestingService::new(
            db.clone(),
            upload_repo.clone(),
            earning_repo.clone(),
            notification_service.clone(),
            config.clone()
        )
    );

    // Create app state
    let app_state = mediator_channel::api::AppState::new(
        auth_service,
        upload_service,
        payment_service,
        earnings_service,
        notification_service,
        testing_service,
        config.clone()
    );

    // Build application router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/auth/register", post(mediator_channel::api::auth::register))
        .route("/auth/login", post(mediator_channel::api::auth::login))
        .route("/auth/logout", post(mediator_channel::api::auth::logout))
        .route("/auth/me", get(mediator_channel::api::auth::me))
        .route("/upload", post(mediator_channel::api::upload::create_upload))
        .route("/uploads", get(mediator_channel::api::upload::list_uploads))
        .route("/payment/simulate", post(mediator_channel::api::payment::simulate_payment))
        .route("/earnings", get(mediator_channel::api::earnings::list_earnings))
        .route("/notifications", get(mediator_channel::api::notifications::list_notifications))
        .route("/cron/settle-earnings", get(mediator_channel::api::cron::settle_earnings))
        .route(
            "/test/simulate-payment-flow",
            post(mediator_channel::api::testing::simulate_payment_flow)
        )
        .route("/test/clear-test-data", post(mediator_channel::api::testing::clear_test_data))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("{}:{}", config.server_host, config.server_port);
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener
        ::bind(&addr).await
        .map_err(|e| mediator_channel::AppError::Internal(e.to_string()))?;

    axum::serve(listener, app).await.map_err(|e|
        mediator_channel::AppError::Internal(e.to_string())
    )?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
