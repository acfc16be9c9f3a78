use actix_web::{get, HttpResponse};

#[get("/")]
async fn hello() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "message": "Hello from the servers" }))
}
