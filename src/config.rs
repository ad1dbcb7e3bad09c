use std::env;

/// Process configuration resolved from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub auth_secret: String,
    pub token_ttl_days: i64,
    pub server_host: String,
    pub server_port: u16,
    /// Days a pending earning is held before the sweep marks it paid.
    pub settlement_hold_days: i64,
    /// Upper bound on simulated payers per load-test request.
    pub load_test_max_users: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenv::dotenv().ok();

        let database_url = env::var("DATABASE_URL")?;

        let auth_secret = env::var("AUTH_SECRET")
            .unwrap_or_else(|_| "mediator-channel-dev-secret".to_string());

        let token_ttl_days = env::var("TOKEN_TTL_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse()?;

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()?;

        let settlement_hold_days = env::var("SETTLEMENT_HOLD_DAYS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()?;
        if settlement_hold_days < 1 {
            return Err("SETTLEMENT_HOLD_DAYS must be at least 1".into());
        }

        let load_test_max_users = env::var("LOAD_TEST_MAX_USERS")
            .unwrap_or_else(|_| "500".to_string())
            .parse()?;

        Ok(Config {
            database_url,
            auth_secret,
            token_ttl_days,
            server_host,
            server_port,
            settlement_hold_days,
            load_test_max_users,
        })
    }
}
