//! Integration tests for the todo routes

mod common;

use actix_web::test;
use serde_json::{json, Value};
use todo_api::create_app;
use uuid::Uuid;

use common::{create_todo, sign_in, test_state};

#[actix_web::test]
async fn test_todo_lifecycle() {
    let app = test::init_service(create_app(test_state())).await;
    let alice = sign_in(&app, "alice@example.com").await;

    let todo = create_todo(&app, &alice, "Buy milk", "high").await;
    assert_eq!(todo["name"], "Buy milk");
    assert_eq!(todo["priority"], "high");
    assert_eq!(todo["completed"], false);
    let id = todo["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/v1/todo/list")
        .insert_header(alice.bearer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["page"], 1);
    assert_eq!(body["data"]["totalPages"], 1);
    assert_eq!(body["data"]["todos"][0]["id"], id.as_str());

    let req = test::TestRequest::get()
        .uri(&format!("/v1/todo/list/{}", id))
        .insert_header(alice.bearer())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let req = test::TestRequest::delete()
        .uri(&format!("/v1/todo/list/{}", id))
        .insert_header(alice.bearer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["id"], id.as_str());
    assert_eq!(body["data"]["message"], "Todo deleted successfully");

    let req = test::TestRequest::get()
        .uri(&format!("/v1/todo/list/{}", id))
        .insert_header(alice.bearer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Todo not found");
}

#[actix_web::test]
async fn test_update_changes_only_given_fields() {
    let app = test::init_service(create_app(test_state())).await;
    let alice = sign_in(&app, "alice@example.com").await;
    let todo = create_todo(&app, &alice, "Buy milk", "low").await;
    let id = todo["id"].as_str().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/v1/todo/list/{}", id))
        .insert_header(alice.bearer())
        .set_json(json!({ "completed": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["completed"], true);
    assert_eq!(body["data"]["name"], "Buy milk");
    assert_eq!(body["data"]["priority"], "low");
}

#[actix_web::test]
async fn test_empty_update_rejected() {
    let app = test::init_service(create_app(test_state())).await;
    let alice = sign_in(&app, "alice@example.com").await;
    let todo = create_todo(&app, &alice, "Buy milk", "low").await;

    let req = test::TestRequest::patch()
        .uri(&format!("/v1/todo/list/{}", todo["id"].as_str().unwrap()))
        .insert_header(alice.bearer())
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_other_users_todos_are_invisible() {
    let app = test::init_service(create_app(test_state())).await;
    let alice = sign_in(&app, "alice@example.com").await;
    let bob = sign_in(&app, "bob@example.com").await;

    let todo = create_todo(&app, &alice, "Private", "medium").await;
    let uri = format!("/v1/todo/list/{}", todo["id"].as_str().unwrap());

    let req = test::TestRequest::get().uri(&uri).insert_header(bob.bearer()).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);

    let req = test::TestRequest::patch()
        .uri(&uri)
        .insert_header(bob.bearer())
        .set_json(json!({ "name": "Hijacked" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);

    let req = test::TestRequest::delete().uri(&uri).insert_header(bob.bearer()).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);

    let req = test::TestRequest::get()
        .uri("/v1/todo/list")
        .insert_header(bob.bearer())
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["total"], 0);

    // Still intact for the owner
    let req = test::TestRequest::get().uri(&uri).insert_header(alice.bearer()).to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["name"], "Private");
}

#[actix_web::test]
async fn test_list_pagination_and_priority_filter() {
    let app = test::init_service(create_app(test_state())).await;
    let alice = sign_in(&app, "alice@example.com").await;

    for i in 0..5 {
        let priority = if i % 2 == 0 { "high" } else { "low" };
        create_todo(&app, &alice, &format!("Task {}", i), priority).await;
    }

    let req = test::TestRequest::get()
        .uri("/v1/todo/list?page=2&limit=2")
        .insert_header(alice.bearer())
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["total"], 5);
    assert_eq!(body["data"]["page"], 2);
    assert_eq!(body["data"]["limit"], 2);
    assert_eq!(body["data"]["totalPages"], 3);
    assert_eq!(body["data"]["todos"].as_array().unwrap().len(), 2);

    let req = test::TestRequest::get()
        .uri("/v1/todo/list?priority=high")
        .insert_header(alice.bearer())
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["total"], 3);
    let todos = body["data"]["todos"].as_array().unwrap();
    assert!(todos.iter().all(|t| t["priority"] == "high"));

    let req = test::TestRequest::get()
        .uri("/v1/todo/list?page=10")
        .insert_header(alice.bearer())
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["total"], 5);
    assert!(body["data"]["todos"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_list_rejects_bad_query() {
    let app = test::init_service(create_app(test_state())).await;
    let alice = sign_in(&app, "alice@example.com").await;

    for query in ["priority=URGENT", "page=0", "limit=101", "limit=0", "page=abc"] {
        let req = test::TestRequest::get()
            .uri(&format!("/v1/todo/list?{}", query))
            .insert_header(alice.bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "query {}", query);
    }
}

#[actix_web::test]
async fn test_create_validation() {
    let app = test::init_service(create_app(test_state())).await;
    let alice = sign_in(&app, "alice@example.com").await;

    let cases = [
        json!({ "name": "   ", "priority": "low" }),
        json!({ "name": "", "priority": "low" }),
        json!({ "name": "x".repeat(256), "priority": "low" }),
        json!({ "name": "Buy milk", "priority": "urgent" }),
        json!({ "name": "Buy milk" }),
    ];

    for payload in cases {
        let req = test::TestRequest::post()
            .uri("/v1/todo/create")
            .insert_header(alice.bearer())
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "payload {}", payload);
    }
}

#[actix_web::test]
async fn test_unknown_or_malformed_id_is_not_found() {
    let app = test::init_service(create_app(test_state())).await;
    let alice = sign_in(&app, "alice@example.com").await;

    for id in ["not-a-uuid".to_string(), Uuid::new_v4().to_string()] {
        let req = test::TestRequest::get()
            .uri(&format!("/v1/todo/list/{}", id))
            .insert_header(alice.bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}

#[actix_web::test]
async fn test_todo_routes_require_auth() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::get().uri("/v1/todo/list").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let req = test::TestRequest::post()
        .uri("/v1/todo/create")
        .set_json(json!({ "name": "Buy milk", "priority": "low" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);
}
