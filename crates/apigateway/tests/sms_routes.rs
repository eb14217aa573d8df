use apigateway::handler::{send_sms_alias_handler, send_sms_handler};
use async_trait::async_trait;
use axum::{
    Extension, Router,
    body::Body,
    http::{Request, StatusCode, header},
    routing::post,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shared::{
    abstract_trait::{EmailServiceTrait, SmsProviderTrait},
    errors::ServiceError,
    notification::NotificationDispatcher,
    utils::EmailTemplateData,
};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

struct RecordingSms {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingSms {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl SmsProviderTrait for RecordingSms {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, to: &str, message: &str) -> Result<(), ServiceError> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), message.to_string()));
        Ok(())
    }
}

struct NullEmail;

#[async_trait]
impl EmailServiceTrait for NullEmail {
    async fn send(
        &self,
        _to: &str,
        _subject: &str,
        _data: &EmailTemplateData,
    ) -> Result<(), ServiceError> {
        Ok(())
    }
}

fn app(sms: Arc<RecordingSms>, admin_phone: Option<String>) -> Router {
    let dispatcher = Arc::new(NotificationDispatcher::new(
        sms,
        Arc::new(NullEmail),
        "admin@quickbite.test".into(),
        admin_phone,
    ));

    Router::new()
        .route("/api/send-sms", post(send_sms_handler))
        .route("/api/sms/send", post(send_sms_alias_handler))
        .layer(Extension(dispatcher))
}

fn sms_request(path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn sends_sms_for_valid_e164_number() {
    let sms = RecordingSms::new();

    let response = app(sms.clone(), None)
        .oneshot(sms_request(
            "/api/send-sms",
            json!({"phoneNumber": "+2348012345678", "message": "Your rider is nearby"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let sent = sms.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "+2348012345678");
}

#[tokio::test]
async fn rejects_local_format_numbers_with_400() {
    let sms = RecordingSms::new();

    let response = app(sms.clone(), None)
        .oneshot(sms_request(
            "/api/send-sms",
            json!({"phoneNumber": "08012345678", "message": "hello"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(sms.sent.lock().unwrap().is_empty());

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Validation failed");
}

#[tokio::test]
async fn rejects_empty_message_with_400() {
    let sms = RecordingSms::new();

    let response = app(sms.clone(), None)
        .oneshot(sms_request(
            "/api/send-sms",
            json!({"phoneNumber": "+2348012345678", "message": ""}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn alias_route_has_the_same_contract() {
    let sms = RecordingSms::new();

    let ok = app(sms.clone(), None)
        .oneshot(sms_request(
            "/api/sms/send",
            json!({"phoneNumber": "+2348012345678", "message": "On the way"}),
        ))
        .await
        .unwrap();
    assert_eq!(ok.status(), StatusCode::OK);

    let bad = app(sms.clone(), None)
        .oneshot(sms_request(
            "/api/sms/send",
            json!({"phoneNumber": "not-a-number", "message": "On the way"}),
        ))
        .await
        .unwrap();
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

    assert_eq!(sms.sent.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn admin_flag_sends_a_second_message_to_the_admin_number() {
    let sms = RecordingSms::new();

    let response = app(sms.clone(), Some("+15550009999".into()))
        .oneshot(sms_request(
            "/api/send-sms",
            json!({
                "phoneNumber": "+2348012345678",
                "message": "Order delivered",
                "admin": true,
                "adminMessage": "Order 42 delivered"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let sent = sms.sent.lock().unwrap();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].0, "+15550009999");
    assert_eq!(sent[1].1, "Order 42 delivered");
}

#[tokio::test]
async fn admin_flag_without_configured_number_still_succeeds() {
    let sms = RecordingSms::new();

    let response = app(sms.clone(), None)
        .oneshot(sms_request(
            "/api/send-sms",
            json!({
                "phoneNumber": "+2348012345678",
                "message": "Order delivered",
                "admin": true
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(sms.sent.lock().unwrap().len(), 1);
}
