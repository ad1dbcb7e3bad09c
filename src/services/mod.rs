pub mod auth_service;
pub mod upload_service;
pub mod payment_service;
pub mod earnings_service;
pub mod notification_service;
pub mod testing_service;

pub use auth_service::AuthService;
pub use upload_service::UploadService;
pub use payment_service::PaymentService;
pub use earnings_service::EarningsService;
pub use notification_service::NotificationService;
pub use testing_service::TestingService;
