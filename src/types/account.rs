use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct RSignup {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct RSignin {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct RSendCode {
    pub email: String,
}

#[derive(Serialize, Deserialize)]
pub struct RVerifyCode {
    pub email: String,
    pub code: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RChangePassword {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RForgotPassword {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

/// Account as it is allowed to appear in responses: no hash, no commitments.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub id: Uuid,
    pub email: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::account::Model> for AccountView {
    fn from(m: entity::account::Model) -> Self {
        AccountView {
            id: m.id,
            email: m.email,
            verified: m.verified,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct AccountRef {
    pub id: Uuid,
    pub email: String,
}
