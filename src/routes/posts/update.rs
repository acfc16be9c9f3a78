use std::sync::Arc;

use actix_web::{put, web, HttpResponse};
use tracing::error;

use crate::db::store::Store;
use crate::routes::posts::{internal_error, IdQuery};
use crate::types::post::{PostData, RPost};
use crate::utils::identity::Identity;
use crate::utils::validation::validate_post;

#[put("/update-post")]
async fn update_post(
    identity: Identity,
    db: web::Data<Arc<dyn Store>>,
    query: web::Query<IdQuery>,
    body: web::Json<RPost>,
) -> HttpResponse {
    if let Err(msg) = validate_post(&body.title, &body.description) {
        return HttpResponse::Unauthorized().json(serde_json::json!({
            "success": false,
            "message": msg,
        }));
    }

    // existence first: a missing post is 404 no matter who asks
    let post = match db.post_by_id(query.id).await {
        Ok(Some((post, _owner))) => post,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "success": false,
                "message": "Post not found",
            }))
        }
        Err(e) => {
            error!("fetching post {} failed: {e}", query.id);
            return internal_error(e);
        }
    };

    if post.owner_id != identity.0.user_id {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "success": false,
            "message": "Forbidden",
        }));
    }

    let updated = db
        .update_post(
            post.id,
            body.title.trim().to_string(),
            body.description.trim().to_string(),
        )
        .await;

    match updated {
        Ok(post) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "Post updated successfully",
            "data": PostData::from(post),
        })),
        Err(e) => {
            error!("updating post {} failed: {e}", query.id);
            internal_error(e)
        }
    }
}
