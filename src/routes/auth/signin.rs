use std::sync::Arc;

use actix_web::cookie::{time::Duration as CookieDuration, Cookie};
use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::EnvConfig;
use crate::db::store::Store;
use crate::types::account::RSignin;
use crate::types::error::AppError;
use crate::utils::hashing::verify_password;
use crate::utils::token::{issue_session, SESSION_TTL_HOURS};
use crate::utils::validation::{validate_email, validate_password};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    pub token: String,
    pub message: String,
}

#[post("/signin")]
async fn signin(
    db: web::Data<Arc<dyn Store>>,
    config: web::Data<EnvConfig>,
    body: web::Json<RSignin>,
) -> Result<HttpResponse, AppError> {
    let email = validate_email(&body.email).map_err(AppError::Validation)?;
    validate_password(&body.password).map_err(AppError::Validation)?;

    let Some(account) = db.account_by_email(&email).await? else {
        return Err(AppError::Unauthorized("User does not exists!".to_string()));
    };

    if !verify_password(&body.password, &account.password) {
        return Err(AppError::Unauthorized("Invalid password.".to_string()));
    }

    // verified rides along as a claim; gates like change-password check it
    let token = issue_session(&account, &config.token_secret)?;
    info!("session issued for {}", account.id);

    // the cookie reuses the Authorization header shape for compatibility
    let mut cookie = Cookie::build("Authorization", format!("Bearer {token}"))
        .path("/")
        .max_age(CookieDuration::hours(SESSION_TTL_HOURS));
    if config.production {
        cookie = cookie.http_only(true).secure(true);
    }

    Ok(HttpResponse::Ok().cookie(cookie.finish()).json(Response {
        success: true,
        token,
        message: "Logged in successfully".to_string(),
    }))
}
