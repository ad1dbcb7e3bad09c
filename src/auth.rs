use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Identity claim carried by the signed token. Handlers trust the decoded
/// claim verbatim; credentials are only checked at login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: String,
    pub role: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// Sign a token for the given identity, valid for `ttl_days`.
pub fn issue_token(
    user_id: &str,
    role: &str,
    email: &str,
    secret: &str,
    ttl_days: i64
) -> Result<String> {
    let now = Utc::now();
    let claims = Claims {
        user_id: user_id.to_string(),
        role: role.to_string(),
        email: email.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::days(ttl_days)).timestamp(),
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes())).map_err(
        |e| AppError::Internal(format!("Failed to sign token: {}", e))
    )
}

/// Decode and verify a token. Any failure (bad signature, expiry,
/// malformed payload) collapses to Unauthorized.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims> {
    decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &Validation::default())
        .map(|data| data.claims)
        .map_err(|_| AppError::Unauthorized)
}

/// Hash a password with Argon2 and a fresh salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?
        .to_string();

    Ok(hash)
}

/// Verify a password against a stored hash.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(password_hash).map_err(|e|
        AppError::Internal(format!("Invalid password hash: {}", e))
    )?;

    let argon2 = Argon2::default();
    Ok(argon2.verify_password(password.as_bytes(), &parsed_hash).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let token = issue_token("user-1", "mediator", "m@example.com", "secret", 7).unwrap();
        let claims = verify_token(&token, "secret").unwrap();

        assert_eq!(claims.user_id, "user-1");
        assert_eq!(claims.role, "mediator");
        assert_eq!(claims.email, "m@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_rejects_wrong_secret() {
        let token = issue_token("user-1", "mediator", "m@example.com", "secret", 7).unwrap();
        assert!(verify_token(&token, "other-secret").is_err());
    }

    #[test]
    fn test_token_rejects_garbage() {
        assert!(verify_token("not.a.token", "secret").is_err());
    }

    #[test]
    fn test_password_hash_and_verify() {
        let hash = hash_password("hunter2hunter2").unwrap();

        assert!(verify_password("hunter2hunter2", &hash).unwrap());
        assert!(!verify_password("wrong password", &hash).unwrap());
    }

    #[test]
    fn test_password_hashes_are_salted() {
        let h1 = hash_password("same password").unwrap();
        let h2 = hash_password("same password").unwrap();

        assert_ne!(h1, h2);
    }
}
