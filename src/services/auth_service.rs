use std::str::FromStr;
use std::sync::Arc;

use serde::{ Deserialize, Serialize };

use crate::auth;
use crate::config::Config;
use crate::db::entity::user;
use crate::db::UserRepository;
use crate::enums::UserRole;
use crate::error::{ AppError, Result };

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of an account; the password hash never leaves the service.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
}

impl From<user::Model> for UserResponse {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            name: user.name,
            role: user.role,
        }
    }
}

pub struct AuthService {
    user_repo: Arc<UserRepository>,
    config: Arc<Config>,
}

impl AuthService {
    pub fn new(user_repo: Arc<UserRepository>, config: Arc<Config>) -> Self {
        Self { user_repo, config }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse> {
        let role = validate_registration(&request)?;

        if self.user_repo.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let password_hash = auth::hash_password(&request.password)?;
        let user = self.user_repo.create(
            request.email,
            password_hash,
            request.name,
            role.as_str().to_string()
        ).await?;

        self.respond_with_token(user)
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse> {
        if request.email.is_empty() || request.password.is_empty() {
            return Err(AppError::Validation("Invalid credentials".to_string()));
        }

        let user = self.user_repo
            .find_by_email(&request.email).await?
            .ok_or(AppError::InvalidCredentials)?;

        if !auth::verify_password(&request.password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        self.respond_with_token(user)
    }

    pub async fn me(&self, user_id: &str) -> Result<UserResponse> {
        let user = self.user_repo.find_by_id(user_id).await?;
        Ok(user.into())
    }

    fn respond_with_token(&self, user: user::Model) -> Result<AuthResponse> {
        let token = auth::issue_token(
            &user.id.to_string(),
            &user.role,
            &user.email,
            &self.config.auth_secret,
            self.config.token_ttl_days
        )?;

        Ok(AuthResponse {
            user: user.into(),
            token,
        })
    }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

/// Check every constraint and report all violations at once. Returns the
/// effective role (defaulting to intermediary).
fn validate_registration(request: &RegisterRequest) -> Result<UserRole> {
    let mut violations: Vec<String> = Vec::new();

    if !is_valid_email(&request.email) {
        violations.push("Invalid email address".to_string());
    }

    if request.password.len() < 8 {
        violations.push("Password must be at least 8 characters".to_string());
    }

    let name_len = request.name.chars().count();
    if !(2..=50).contains(&name_len) {
        violations.push("Name must be between 2 and 50 characters".to_string());
    }

    let role = match request.role.as_deref() {
        None | Some("") => Some(UserRole::Intermediary),
        Some(raw) => {
            match UserRole::from_str(raw) {
                Ok(role) if UserRole::registerable().contains(&role) => Some(role),
                Ok(_) => {
                    violations.push(
                        "Role must be one of intermediary, mediator, admin".to_string()
                    );
                    None
                }
                Err(AppError::Validation(message)) => {
                    violations.push(message);
                    None
                }
                Err(_) => None,
            }
        }
    };

    if violations.is_empty() {
        Ok(role.unwrap_or(UserRole::Intermediary))
    } else {
        Err(AppError::Validation(violations.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ DatabaseBackend, MockDatabase };
    use uuid::Uuid;

    fn test_config() -> Arc<Config> {
        Arc::new(Config {
            database_url: "postgres://unused".to_string(),
            auth_secret: "test-secret".to_string(),
            token_ttl_days: 7,
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            settlement_hold_days: 10,
            load_test_max_users: 500,
        })
    }

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            email: "mediator@example.com".to_string(),
            password: "longenough".to_string(),
            name: "Med".to_string(),
            role: None,
        }
    }

    fn stored_user(password_hash: String) -> user::Model {
        user::Model {
            id: Uuid::new_v4(),
            email: "mediator@example.com".to_string(),
            password_hash,
            name: "Med".to_string(),
            role: "mediator".to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_registration_defaults_to_intermediary() {
        assert_eq!(validate_registration(&register_request()).unwrap(), UserRole::Intermediary);
    }

    #[test]
    fn test_registration_rejects_viewer_role() {
        let mut request = register_request();
        request.role = Some("viewer".to_string());

        assert!(validate_registration(&request).is_err());
    }

    #[test]
    fn test_registration_collects_all_violations() {
        let request = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "short".to_string(),
            name: "x".to_string(),
            role: None,
        };

        let err = validate_registration(&request).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Invalid email address"));
        assert!(message.contains("at least 8 characters"));
        assert!(message.contains("between 2 and 50"));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a b@c.co"));
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let hash = auth::hash_password("longenough").unwrap();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored_user(hash)]])
            .into_connection();

        let service = AuthService::new(Arc::new(UserRepository::new(db)), test_config());
        let err = service.register(register_request()).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_rejected() {
        let hash = auth::hash_password("the-right-password").unwrap();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored_user(hash)]])
            .into_connection();

        let service = AuthService::new(Arc::new(UserRepository::new(db)), test_config());
        let err = service
            .login(LoginRequest {
                email: "mediator@example.com".to_string(),
                password: "the-wrong-password".to_string(),
            }).await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_issues_verifiable_token() {
        let hash = auth::hash_password("the-right-password").unwrap();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored_user(hash)]])
            .into_connection();

        let service = AuthService::new(Arc::new(UserRepository::new(db)), test_config());
        let response = service
            .login(LoginRequest {
                email: "mediator@example.com".to_string(),
                password: "the-right-password".to_string(),
            }).await
            .unwrap();

        let claims = auth::verify_token(&response.token, "test-secret").unwrap();
        assert_eq!(claims.email, "mediator@example.com");
        assert_eq!(claims.role, "mediator");
        assert_eq!(claims.user_id, response.user.id);
    }
}
