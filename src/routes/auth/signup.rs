use std::sync::Arc;

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::EnvConfig;
use crate::db::store::Store;
use crate::types::account::{AccountView, RSignup};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::hashing::hash_password;
use crate::utils::validation::{validate_email, validate_password};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    pub message: String,
    pub result: AccountView,
}

#[post("/signup")]
async fn signup(
    db: web::Data<Arc<dyn Store>>,
    config: web::Data<EnvConfig>,
    body: web::Json<RSignup>,
) -> ApiResult<Response> {
    let email = validate_email(&body.email).map_err(AppError::Validation)?;
    validate_password(&body.password).map_err(AppError::Validation)?;

    if db.account_by_email(&email).await?.is_some() {
        return Err(AppError::AlreadyExists);
    }

    let hashed = hash_password(&body.password, config.hash_cost)?;
    let account = db.create_account(email, hashed).await?;
    info!("account created: {}", account.id);

    Ok(ApiResponse::Created(Response {
        success: true,
        message: "Your account has been created successfully".to_string(),
        result: AccountView::from(account),
    }))
}
