use std::sync::Arc;

use actix_web::{get, web, HttpResponse};
use tracing::error;

use crate::db::store::Store;
use crate::routes::posts::{internal_error, IdQuery};
use crate::types::post::PostView;

#[get("/single-post")]
async fn single_post(db: web::Data<Arc<dyn Store>>, query: web::Query<IdQuery>) -> HttpResponse {
    match db.post_by_id(query.id).await {
        Ok(Some(joined)) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "Post fetched successfully",
            "data": PostView::from_joined(joined),
        })),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "success": false,
            "message": "Post not found",
        })),
        Err(e) => {
            error!("fetching post {} failed: {e}", query.id);
            internal_error(e)
        }
    }
}
