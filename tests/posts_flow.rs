mod common;

use std::collections::HashSet;

use actix_web::{http::StatusCode, test};
use bulletin::db::store::Store;
use common::{client::TestClient, test_data, TestContext};
use uuid::Uuid;

#[tokio::test]
async fn test_create_post_flow_success() {
    println!("\n\n[+] Running test: test_create_post_flow_success");
    let ctx = TestContext::new();
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let email = test_data::sample_email();
    let account = client
        .create_test_account(&email, test_data::PASSWORD, true)
        .await;
    let token = client.session_for(account.id).await;

    let req = test::TestRequest::post()
        .uri("/create-post")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(serde_json::json!({
            "title": "First post",
            "description": "Hello there",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Post created successfully");
    assert_eq!(body["data"]["title"], "First post");
    assert_eq!(body["data"]["ownerId"], account.id.to_string());
    println!("[/] Test passed: post created.");
}

#[tokio::test]
async fn test_create_post_requires_session_and_fields() {
    println!("\n\n[+] Running test: test_create_post_requires_session_and_fields");
    let ctx = TestContext::new();
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    // no session
    let req = test::TestRequest::post()
        .uri("/create-post")
        .set_json(serde_json::json!({ "title": "x", "description": "y" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    // blank title with a valid session
    let email = test_data::sample_email();
    let account = client
        .create_test_account(&email, test_data::PASSWORD, true)
        .await;
    let token = client.session_for(account.id).await;

    let req = test::TestRequest::post()
        .uri("/create-post")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(serde_json::json!({ "title": "   ", "description": "y" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Title is required");
    println!("[/] Test passed: create-post guards hold.");
}

#[tokio::test]
async fn test_single_post_flow() {
    println!("\n\n[+] Running test: test_single_post_flow");
    let ctx = TestContext::new();
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let email = test_data::sample_email();
    let account = client
        .create_test_account(&email, test_data::PASSWORD, true)
        .await;
    let post = ctx
        .db
        .create_post(account.id, "A post".to_string(), "Body".to_string())
        .await
        .unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/single-post?id={}", post.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["title"], "A post");
    // list/single populate the owner
    assert_eq!(body["data"]["owner"]["email"], email);

    let req = test::TestRequest::get()
        .uri(&format!("/single-post?id={}", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Post not found");
    println!("[/] Test passed: single-post fetch and 404.");
}

#[tokio::test]
async fn test_pagination_is_disjoint_and_newest_first() {
    println!("\n\n[+] Running test: test_pagination_is_disjoint_and_newest_first");
    let ctx = TestContext::new();
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let email = test_data::sample_email();
    let account = client
        .create_test_account(&email, test_data::PASSWORD, true)
        .await;

    println!("[>] Seeding 15 posts");
    for i in 1..=15 {
        ctx.db
            .create_post(account.id, format!("post-{i}"), "body".to_string())
            .await
            .unwrap();
    }

    let req = test::TestRequest::get().uri("/posts?page=1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page1: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(page1["totalPosts"], 15);
    assert_eq!(page1["totalPages"], 2);
    assert_eq!(page1["data"].as_array().unwrap().len(), 10);
    // newest first: the last created post leads
    assert_eq!(page1["data"][0]["title"], "post-15");

    let req = test::TestRequest::get().uri("/posts?page=2").to_request();
    let page2: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(page2["data"].as_array().unwrap().len(), 5);

    let ids =
        |page: &serde_json::Value| -> HashSet<String> {
            page["data"]
                .as_array()
                .unwrap()
                .iter()
                .map(|p| p["id"].as_str().unwrap().to_string())
                .collect()
        };
    let (first, second) = (ids(&page1), ids(&page2));
    assert!(first.is_disjoint(&second));

    // page 0 and a missing page read as page 1
    let req = test::TestRequest::get().uri("/posts?page=0").to_request();
    let page0: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(ids(&page0), first);

    let req = test::TestRequest::get().uri("/posts").to_request();
    let default_page: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(ids(&default_page), first);
    println!("[/] Test passed: pagination pages are disjoint, newest first.");
}

#[tokio::test]
async fn test_update_post_owner_only() {
    println!("\n\n[+] Running test: test_update_post_owner_only");
    let ctx = TestContext::new();
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let owner = client
        .create_test_account(&test_data::sample_email(), test_data::PASSWORD, true)
        .await;
    let intruder = client
        .create_test_account(&test_data::sample_email(), test_data::PASSWORD, true)
        .await;
    let post = ctx
        .db
        .create_post(owner.id, "Original".to_string(), "Body".to_string())
        .await
        .unwrap();

    // a perfectly valid request from the wrong account
    let intruder_token = client.session_for(intruder.id).await;
    let req = test::TestRequest::put()
        .uri(&format!("/update-post?id={}", post.id))
        .insert_header(("Authorization", format!("Bearer {intruder_token}")))
        .set_json(serde_json::json!({ "title": "Hijacked", "description": "Body" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let stored = ctx.db.post_by_id(post.id).await.unwrap().unwrap().0;
    assert_eq!(stored.title, "Original");

    // the owner goes through
    let owner_token = client.session_for(owner.id).await;
    let req = test::TestRequest::put()
        .uri(&format!("/update-post?id={}", post.id))
        .insert_header(("Authorization", format!("Bearer {owner_token}")))
        .set_json(serde_json::json!({ "title": "Edited", "description": "Body" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["title"], "Edited");
    println!("[/] Test passed: update is owner-gated.");
}

#[tokio::test]
async fn test_update_post_missing_is_not_found_before_ownership() {
    println!("\n\n[+] Running test: test_update_post_missing_is_not_found_before_ownership");
    let ctx = TestContext::new();
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let account = client
        .create_test_account(&test_data::sample_email(), test_data::PASSWORD, true)
        .await;
    let token = client.session_for(account.id).await;

    let req = test::TestRequest::put()
        .uri(&format!("/update-post?id={}", Uuid::new_v4()))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(serde_json::json!({ "title": "x", "description": "y" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
    println!("[/] Test passed: 404 takes precedence.");
}

#[tokio::test]
async fn test_delete_post_owner_only_and_permanent() {
    println!("\n\n[+] Running test: test_delete_post_owner_only_and_permanent");
    let ctx = TestContext::new();
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let owner = client
        .create_test_account(&test_data::sample_email(), test_data::PASSWORD, true)
        .await;
    let intruder = client
        .create_test_account(&test_data::sample_email(), test_data::PASSWORD, true)
        .await;
    let post = ctx
        .db
        .create_post(owner.id, "Keep me".to_string(), "Body".to_string())
        .await
        .unwrap();

    let intruder_token = client.session_for(intruder.id).await;
    let req = test::TestRequest::delete()
        .uri(&format!("/delete-post?id={}", post.id))
        .insert_header(("Authorization", format!("Bearer {intruder_token}")))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FORBIDDEN
    );
    assert!(ctx.db.post_by_id(post.id).await.unwrap().is_some());

    let owner_token = client.session_for(owner.id).await;
    let req = test::TestRequest::delete()
        .uri(&format!("/delete-post?id={}", post.id))
        .insert_header(("Authorization", format!("Bearer {owner_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Post deleted successfully");

    // gone for good
    assert!(ctx.db.post_by_id(post.id).await.unwrap().is_none());
    let req = test::TestRequest::get()
        .uri(&format!("/single-post?id={}", post.id))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
    println!("[/] Test passed: delete is owner-gated and permanent.");
}
