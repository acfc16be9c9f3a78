use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::types::{claims::SessionClaims, error::AppError};

pub const SESSION_TTL_HOURS: i64 = 8;

/// Sign a session for an account. The verified flag is carried as a claim and
/// checked downstream by gates like change-password.
pub fn issue_session(account: &entity::account::Model, secret: &str) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = SessionClaims {
        user_id: account.id,
        email: account.email.clone(),
        verified: account.verified,
        iat: now.timestamp(),
        exp: (now + Duration::hours(SESSION_TTL_HOURS)).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))
}

/// Signature and expiry check. Anything wrong with the token collapses into
/// a plain 401; callers never learn which check failed.
pub fn validate_session(token: &str, secret: &str) -> Result<SessionClaims, AppError> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized("Unauthorized".to_string()))
}
