use std::sync::Arc;

use actix_web::{patch, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::config::EnvConfig;
use crate::db::store::Store;
use crate::types::account::{AccountRef, RChangePassword, RForgotPassword, RSendCode};
use crate::types::error::AppError;
use crate::types::mail::SendEmail;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::hashing::{hash_password, verify_password};
use crate::utils::identity::Identity;
use crate::utils::mail::Mailer;
use crate::utils::otp::{check_code, code_ttl, commit_code, generate_code};
use crate::utils::validation::{validate_code, validate_email, validate_password};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ChangePasswordResponse {
    pub success: bool,
    pub message: String,
    pub result: AccountRef,
}

#[patch("/change-password")]
async fn change_password(
    identity: Identity,
    db: web::Data<Arc<dyn Store>>,
    config: web::Data<EnvConfig>,
    body: web::Json<RChangePassword>,
) -> ApiResult<ChangePasswordResponse> {
    let Identity(claims) = identity;

    validate_password(&body.old_password).map_err(AppError::Validation)?;
    validate_password(&body.new_password).map_err(AppError::Validation)?;

    if !claims.verified {
        return Err(AppError::Unauthorized("You are not verified!".to_string()));
    }

    let Some(account) = db.account_by_id(claims.user_id).await? else {
        return Err(AppError::NotFound("User does not exists!".to_string()));
    };

    if !verify_password(&body.old_password, &account.password) {
        return Err(AppError::Unauthorized("Invalid password.".to_string()));
    }

    let hashed = hash_password(&body.new_password, config.hash_cost)?;
    db.set_password(account.id, hashed).await?;
    info!("password changed for {}", account.id);

    Ok(ApiResponse::Ok(ChangePasswordResponse {
        success: true,
        message: "Password changed successfully".to_string(),
        result: AccountRef {
            id: account.id,
            email: account.email,
        },
    }))
}

#[patch("/send-forgot-password-code")]
async fn send_forgot_password_code(
    db: web::Data<Arc<dyn Store>>,
    mailer: web::Data<Arc<dyn Mailer>>,
    config: web::Data<EnvConfig>,
    body: web::Json<RSendCode>,
) -> ApiResult<Response> {
    let email = validate_email(&body.email).map_err(AppError::BadRequest)?;

    let Some(account) = db.account_by_email(&email).await? else {
        return Err(AppError::NotFound("User does not exists!".to_string()));
    };

    let code = generate_code();
    mailer
        .send(SendEmail {
            from: config.mail.sender.clone(),
            to: vec![account.email.clone()],
            subject: "forgot password code".to_string(),
            html: Some(format!("<h1>{code}</h1>")),
            ..Default::default()
        })
        .await
        .map_err(|e| {
            error!("forgot-password mail rejected: {e}");
            AppError::BadRequest("Code sent failed!".to_string())
        })?;

    // separate field namespace from the verification flow, so the two code
    // kinds can never be cross-used
    let commitment = commit_code(&code, &config.hmac_secret);
    db.set_forgot_password_code(account.id, commitment, Utc::now())
        .await?;
    info!("forgot-password code issued for {}", account.id);

    Ok(ApiResponse::Ok(Response {
        success: true,
        message: "Code sent successfully!".to_string(),
    }))
}

#[patch("/verify-forgot-password-code")]
async fn verify_forgot_password_code(
    db: web::Data<Arc<dyn Store>>,
    config: web::Data<EnvConfig>,
    body: web::Json<RForgotPassword>,
) -> ApiResult<Response> {
    let email = validate_email(&body.email).map_err(AppError::BadRequest)?;
    validate_code(&body.code).map_err(AppError::BadRequest)?;
    validate_password(&body.new_password).map_err(AppError::BadRequest)?;

    let Some(account) = db.account_by_email(&email).await? else {
        return Err(AppError::NotFound("User does not exist!".to_string()));
    };

    let (Some(commitment), Some(issued_at)) = (
        account.forgot_password_code.as_deref(),
        account.forgot_password_code_issued_at,
    ) else {
        return Err(AppError::CodeNotSent);
    };

    let check = check_code(
        &body.code,
        &config.hmac_secret,
        commitment,
        issued_at,
        code_ttl(),
    );

    if check.valid && !check.expired {
        let hashed = hash_password(&body.new_password, config.hash_cost)?;
        // new hash and cleared commitment land in the same write
        db.reset_password(account.id, hashed).await?;
        info!("password reset for {}", account.id);
        return Ok(ApiResponse::Ok(Response {
            success: true,
            message: "Your password is updated successfully!".to_string(),
        }));
    }

    if check.expired {
        return Err(AppError::Expired);
    }
    Err(AppError::InvalidCode)
}
