use std::sync::Arc;

use actix_web::{delete, web, HttpResponse};
use tracing::{error, info};

use crate::db::store::Store;
use crate::routes::posts::{internal_error, IdQuery};
use crate::utils::identity::Identity;

#[delete("/delete-post")]
async fn delete_post(
    identity: Identity,
    db: web::Data<Arc<dyn Store>>,
    query: web::Query<IdQuery>,
) -> HttpResponse {
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

    match db.delete_post(post.id).await {
        Ok(()) => {
            info!("post deleted: {} by {}", post.id, post.owner_id);
            HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "message": "Post deleted successfully",
            }))
        }
        Err(e) => {
            error!("deleting post {} failed: {e}", query.id);
            internal_error(e)
        }
    }
}
