mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};
use serde_json::json;

#[tokio::test]
async fn test_get_users_without_filter_returns_all() {
    println!("\n\n[+] Running test: test_get_users_without_filter_returns_all");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.seed_manager(1, "true").await;
    client.seed_manager(2, "true").await;
    client.create_test_user(1, "9876543210").await;
    client.create_test_user(2, "9876543211").await;

    let req = test::TestRequest::post()
        .uri("/get_users")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["users"].as_array().unwrap().len(), 2);
    println!("[/] Test passed: all users returned.");
}

#[tokio::test]
async fn test_get_users_filter_by_manager() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.seed_manager(1, "true").await;
    client.seed_manager(2, "true").await;
    client.create_test_user(1, "9876543210").await;
    client.create_test_user(1, "9876543211").await;
    client.create_test_user(2, "9876543212").await;

    let req = test::TestRequest::post()
        .uri("/get_users")
        .set_json(json!({"manager_id": 1}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u["manager_id"] == 1));
}

#[tokio::test]
async fn test_get_users_filter_by_mobile() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.seed_manager(1, "true").await;
    client.create_test_user(1, "9876543210").await;
    client.create_test_user(1, "9876543211").await;

    let req = test::TestRequest::post()
        .uri("/get_users")
        .set_json(json!({"mob_num": "9876543211"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["mob_num"], "9876543211");
}

#[tokio::test]
async fn test_get_users_filter_by_user_id() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.seed_manager(1, "true").await;
    let target = client.create_test_user(1, "9876543210").await;
    client.create_test_user(1, "9876543211").await;

    let req = test::TestRequest::post()
        .uri("/get_users")
        .set_json(json!({"user_id": target.to_string()}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["user_id"], target.to_string());
}

#[tokio::test]
async fn test_get_users_first_nonempty_filter_wins() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.seed_manager(1, "true").await;
    client.seed_manager(2, "true").await;
    let target = client.create_test_user(1, "9876543210").await;
    client.create_test_user(2, "9876543211").await;

    // user_id outranks the manager filter that would match the other user
    let req = test::TestRequest::post()
        .uri("/get_users")
        .set_json(json!({"user_id": target.to_string(), "manager_id": 2}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["user_id"], target.to_string());
}

#[tokio::test]
async fn test_get_users_no_match_returns_empty_list() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.seed_manager(1, "true").await;
    client.create_test_user(1, "9876543210").await;

    let req = test::TestRequest::post()
        .uri("/get_users")
        .set_json(json!({"mob_num": "0000000000"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["users"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_get_users_invalid_uuid_is_rejected() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/get_users")
        .set_json(json!({"user_id": "not-a-uuid"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
