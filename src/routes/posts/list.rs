use std::sync::Arc;

use actix_web::{get, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::db::store::Store;
use crate::routes::posts::internal_error;
use crate::types::post::PostView;

#[derive(Deserialize)]
struct PageQuery {
    page: Option<u64>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub success: bool,
    pub message: String,
    pub data: Vec<PostView>,
    pub total_posts: u64,
    pub total_pages: u64,
}

#[get("/posts")]
async fn get_posts(db: web::Data<Arc<dyn Store>>, query: web::Query<PageQuery>) -> HttpResponse {
    let page = query.page.unwrap_or(1);

    match db.list_posts(page).await {
        Ok(page) => HttpResponse::Ok().json(Response {
            success: true,
            message: "Posts fetched successfully".to_string(),
            data: page.posts.into_iter().map(PostView::from_joined).collect(),
            total_posts: page.total_posts,
            total_pages: page.total_pages,
        }),
        Err(e) => {
            error!("listing posts failed: {e}");
            internal_error(e)
        }
    }
}
