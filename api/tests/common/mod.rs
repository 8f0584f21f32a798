//! Shared setup for HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_http::Request;
use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::header,
    test, web,
};
use serde_json::{json, Value};

use todo_api::AppState;
use todo_core::repositories::{InMemoryTodoRepository, InMemoryTokenRepository, InMemoryUserRepository};
use todo_shared::config::AppConfig;

pub const PASSWORD: &str = "Password123";

pub type TestState = AppState<InMemoryUserRepository, InMemoryTokenRepository, InMemoryTodoRepository>;

/// Fresh state over empty in-memory stores
pub fn test_state() -> web::Data<TestState> {
    web::Data::new(AppState::new(
        &AppConfig::for_tests(),
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryTokenRepository::new()),
        Arc::new(InMemoryTodoRepository::new()),
    )
    .unwrap())
}

/// Tokens held by a logged-in client
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
}

impl Session {
    pub fn bearer(&self) -> (header::HeaderName, String) {
        (header::AUTHORIZATION, format!("Bearer {}", self.access_token))
    }
}

/// Value of the `refreshToken` cookie set by a response
pub fn refresh_cookie<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "refreshToken")
        .map(|c| c.value().to_string())
}

pub async fn register<S, B>(app: &S, email: &str) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/v1/auth/register")
        .set_json(json!({ "email": email, "password": PASSWORD }))
        .to_request();
    test::call_service(app, req).await
}

pub async fn login<S, B>(app: &S, email: &str, password: &str) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/v1/auth/login")
        .set_json(json!({ "email": email, "password": password }))
        .to_request();
    test::call_service(app, req).await
}

/// Register `email` and log in, returning both tokens
pub async fn sign_in<S, B>(app: &S, email: &str) -> Session
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = register(app, email).await;
    assert_eq!(resp.status(), 201);

    let resp = login(app, email, PASSWORD).await;
    assert_eq!(resp.status(), 200);
    let refresh_token = refresh_cookie(&resp).expect("login sets the refresh cookie");

    let body: Value = test::read_body_json(resp).await;
    Session {
        access_token: body["data"]["accessToken"].as_str().unwrap().to_string(),
        refresh_token,
    }
}

pub async fn create_todo<S, B>(app: &S, session: &Session, name: &str, priority: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/v1/todo/create")
        .insert_header(session.bearer())
        .set_json(json!({ "name": name, "priority": priority }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    body["data"].clone()
}
