use apigateway::handler::{get_guest_session, put_guest_session};
use async_trait::async_trait;
use axum::{
    Extension, Router,
    body::Body,
    http::{Request, StatusCode, header},
    routing::{get, post},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shared::{
    abstract_trait::{DynGuestSessionStore, GuestSession, GuestSessionStoreTrait},
    errors::ServiceError,
};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

struct InMemorySessions {
    sessions: Mutex<Vec<GuestSession>>,
}

impl InMemorySessions {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            sessions: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl GuestSessionStoreTrait for InMemorySessions {
    async fn get(&self, phone: &str) -> Result<Option<GuestSession>, ServiceError> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.phone == phone)
            .cloned())
    }

    async fn put(&self, session: &GuestSession) -> Result<(), ServiceError> {
        self.sessions.lock().unwrap().push(session.clone());
        Ok(())
    }
}

struct DownSessions;

#[async_trait]
impl GuestSessionStoreTrait for DownSessions {
    async fn get(&self, _phone: &str) -> Result<Option<GuestSession>, ServiceError> {
        Err(ServiceError::Cache("connection refused".into()))
    }

    async fn put(&self, _session: &GuestSession) -> Result<(), ServiceError> {
        Err(ServiceError::Cache("connection refused".into()))
    }
}

fn app(store: DynGuestSessionStore) -> Router {
    Router::new()
        .route("/api/guest-session", get(get_guest_session))
        .route("/api/guest-session", post(put_guest_session))
        .layer(Extension(store))
}

#[tokio::test]
async fn round_trips_a_stored_session() {
    let store = InMemorySessions::new();
    let app = app(store);

    let put = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/guest-session")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({"phone": "+2348012345678", "verified": true}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(put.status(), StatusCode::OK);

    let got = app
        .oneshot(
            Request::builder()
                .uri("/api/guest-session?phone=%2B2348012345678")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(got.status(), StatusCode::OK);

    let body = got.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["data"]["verified"], true);
}

#[tokio::test]
async fn unknown_phone_is_a_404() {
    let response = app(InMemorySessions::new())
        .oneshot(
            Request::builder()
                .uri("/api/guest-session?phone=%2B2348012345678")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn store_outage_is_not_reported_as_a_missing_session() {
    let response = app(Arc::new(DownSessions))
        .oneshot(
            Request::builder()
                .uri("/api/guest-session?phone=%2B2348012345678")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn rejects_non_e164_lookups() {
    let response = app(InMemorySessions::new())
        .oneshot(
            Request::builder()
                .uri("/api/guest-session?phone=08012345678")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
