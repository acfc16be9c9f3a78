use actix_web::HttpResponse;
use serde::Deserialize;
use uuid::Uuid;

use crate::types::error::AppError;

pub mod create;
pub mod delete;
pub mod list;
pub mod single;
pub mod update;

#[derive(Deserialize)]
pub(crate) struct IdQuery {
    pub id: Uuid,
}

// Post handlers echo the caught error's text; the auth handlers deliberately
// do not. Kept asymmetric on purpose, see DESIGN.md.
pub(crate) fn internal_error(err: AppError) -> HttpResponse {
    HttpResponse::InternalServerError().json(serde_json::json!({
        "success": false,
        "message": "Internal server error",
        "error": err.to_string(),
    }))
}
