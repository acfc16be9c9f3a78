use std::sync::Arc;

use actix_web::{post, web, HttpResponse};
use tracing::{error, info};

use crate::db::store::Store;
use crate::routes::posts::internal_error;
use crate::types::post::{PostData, RPost};
use crate::utils::identity::Identity;
use crate::utils::validation::validate_post;

#[post("/create-post")]
async fn create_post(
    identity: Identity,
    db: web::Data<Arc<dyn Store>>,
    body: web::Json<RPost>,
) -> HttpResponse {
    if let Err(msg) = validate_post(&body.title, &body.description) {
        return HttpResponse::Unauthorized().json(serde_json::json!({
            "success": false,
            "message": msg,
        }));
    }

    let result = db
        .create_post(
            identity.0.user_id,
            body.title.trim().to_string(),
            body.description.trim().to_string(),
        )
        .await;

    match result {
        Ok(post) => {
            info!("post created: {} by {}", post.id, post.owner_id);
            HttpResponse::Created().json(serde_json::json!({
                "success": true,
                "message": "Post created successfully",
                "data": PostData::from(post),
            }))
        }
        Err(e) => {
            error!("creating post failed: {e}");
            internal_error(e)
        }
    }
}
