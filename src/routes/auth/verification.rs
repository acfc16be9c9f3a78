use std::sync::Arc;

use actix_web::{patch, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::config::EnvConfig;
use crate::db::store::Store;
use crate::types::account::{RSendCode, RVerifyCode};
use crate::types::error::AppError;
use crate::types::mail::SendEmail;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::identity::Identity;
use crate::utils::mail::Mailer;
use crate::utils::otp::{check_code, code_ttl, commit_code, generate_code};
use crate::utils::validation::{validate_code, validate_email};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    pub message: String,
}

#[patch("/send-verification-code")]
async fn send_verification_code(
    _identity: Identity,
    db: web::Data<Arc<dyn Store>>,
    mailer: web::Data<Arc<dyn Mailer>>,
    config: web::Data<EnvConfig>,
    body: web::Json<RSendCode>,
) -> ApiResult<Response> {
    let email = validate_email(&body.email).map_err(AppError::BadRequest)?;

    let Some(account) = db.account_by_email(&email).await? else {
        return Err(AppError::NotFound("User does not exists!".to_string()));
    };
    if account.verified {
        return Err(AppError::BadRequest("You are already verified!".to_string()));
    }

    let code = generate_code();
    mailer
        .send(SendEmail {
            from: config.mail.sender.clone(),
            to: vec![account.email.clone()],
            subject: "verification code".to_string(),
            html: Some(format!("<h1>{code}</h1>")),
            ..Default::default()
        })
        .await
        .map_err(|e| {
            error!("verification mail rejected: {e}");
            AppError::BadRequest("Code sent failed!".to_string())
        })?;

    // persist the commitment only once the recipient was accepted, so a code
    // is never "active" without having been handed to the transport
    let commitment = commit_code(&code, &config.hmac_secret);
    db.set_verification_code(account.id, commitment, Utc::now())
        .await?;
    info!("verification code issued for {}", account.id);

    Ok(ApiResponse::Ok(Response {
        success: true,
        message: "Code sent successfully!".to_string(),
    }))
}

#[patch("/verify-verification-code")]
async fn verify_verification_code(
    _identity: Identity,
    db: web::Data<Arc<dyn Store>>,
    config: web::Data<EnvConfig>,
    body: web::Json<RVerifyCode>,
) -> ApiResult<Response> {
    let email = validate_email(&body.email).map_err(AppError::BadRequest)?;
    validate_code(&body.code).map_err(AppError::BadRequest)?;

    let Some(account) = db.account_by_email(&email).await? else {
        return Err(AppError::NotFound("User does not exist!".to_string()));
    };
    if account.verified {
        return Err(AppError::BadRequest("You are already verified!".to_string()));
    }

    let (Some(commitment), Some(issued_at)) = (
        account.verification_code.as_deref(),
        account.verification_code_issued_at,
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
        // one-shot: flipping verified also clears the commitment
        db.mark_verified(account.id).await?;
        info!("account verified: {}", account.id);
        return Ok(ApiResponse::Ok(Response {
            success: true,
            message: "Your account has been verified successfully!".to_string(),
        }));
    }

    // expired wins over invalid so a stale-but-correct code reads as expired;
    // the stale commitment stays on file and keeps reporting expired
    if check.expired {
        return Err(AppError::Expired);
    }
    Err(AppError::InvalidCode)
}
