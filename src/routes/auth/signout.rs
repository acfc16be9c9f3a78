use actix_web::{cookie::Cookie, post, HttpResponse};

use crate::utils::identity::Identity;

/// Clears the cookie only. Tokens already copied elsewhere stay valid until
/// they expire on their own.
#[post("/signout")]
async fn signout(_identity: Identity) -> HttpResponse {
    let mut removal = Cookie::build("Authorization", "").path("/").finish();
    removal.make_removal();

    HttpResponse::Ok().cookie(removal).json(serde_json::json!({
        "success": true,
        "message": "Logged out successfully",
    }))
}
