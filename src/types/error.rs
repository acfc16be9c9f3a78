use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    // standard web stuffs
    #[error("already exists")]
    AlreadyExists,
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("forbidden")]
    Forbidden,

    // one-time-code outcomes; expired and invalid stay distinct on the wire
    #[error("code expired")]
    Expired,
    #[error("invalid code")]
    InvalidCode,
    #[error("code not sent")]
    CodeNotSent,

    // infra things
    #[error("config error: {0}")]
    Config(String),
    #[error(transparent)]
    Db(DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    success: bool,
    message: &'a str,
}

impl AppError {
    fn from_db(err: DbErr) -> Self {
        match &err {
            DbErr::RecordNotFound(msg) => AppError::NotFound(msg.clone()),
            DbErr::RecordNotUpdated => AppError::NotFound("Record not found".to_string()),
            _ => AppError::Db(err),
        }
    }

    /// What the client gets to see. Internal detail stays in the logs.
    fn client_message(&self) -> String {
        match self {
            Self::AlreadyExists => "User already exists!".to_string(),
            Self::NotFound(m) | Self::Validation(m) | Self::BadRequest(m) | Self::Unauthorized(m) => {
                m.clone()
            }
            Self::Forbidden => "Forbidden".to_string(),
            Self::Expired => "Verification code has expired!".to_string(),
            Self::InvalidCode => "Invalid verification code!".to_string(),
            Self::CodeNotSent => "Verification code not sent!".to_string(),
            Self::Config(_) | Self::Db(_) | Self::Internal(_) => {
                "Something went wrong. Please try again later.".to_string()
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // the auth surface reports schema failures and duplicates as 401
            Self::AlreadyExists | Self::Validation(_) | Self::Unauthorized(_) => {
                StatusCode::UNAUTHORIZED
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::Expired | Self::InvalidCode | Self::CodeNotSent => {
                StatusCode::BAD_REQUEST
            }
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Config(_) | Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code() == StatusCode::INTERNAL_SERVER_ERROR {
            error!("request failed: {self}");
        }
        HttpResponse::build(self.status_code()).json(ErrorBody {
            success: false,
            message: &self.client_message(),
        })
    }
}
