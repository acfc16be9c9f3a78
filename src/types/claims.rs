use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What rides inside a session token. Not persisted anywhere; revocation is
/// only secret rotation or natural expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub user_id: Uuid,
    pub email: String,
    pub verified: bool,
    pub iat: i64,
    pub exp: i64,
}
