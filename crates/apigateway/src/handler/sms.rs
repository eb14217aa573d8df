use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{
    Extension, Json, http::StatusCode, response::IntoResponse, routing::post,
};
use shared::{
    domain::{requests::SendSmsRequest, responses::ApiResponse},
    errors::HttpError,
    notification::NotificationDispatcher,
};
use std::sync::Arc;
use tracing::error;
use utoipa_axum::router::OpenApiRouter;

async fn dispatch_sms(
    dispatcher: &NotificationDispatcher,
    body: &SendSmsRequest,
) -> Result<ApiResponse<bool>, HttpError> {
    dispatcher
        .send_sms(&body.phone_number, &body.message)
        .await
        .map_err(HttpError::from)?;

    // the admin copy is best effort and never fails the request
    if body.admin.unwrap_or(false) {
        let admin_message = body.admin_message.as_deref().unwrap_or(&body.message);
        if let Err(e) = dispatcher.send_admin_sms(admin_message).await {
            error!("❌ Admin SMS copy failed: {e}");
        }
    }

    Ok(ApiResponse::success("SMS sent", true))
}

#[utoipa::path(
    post,
    path = "/api/send-sms",
    request_body = SendSmsRequest,
    responses(
        (status = 200, description = "SMS dispatched", body = ApiResponse<bool>),
        (status = 400, description = "Phone number is not E.164"),
        (status = 500, description = "All SMS providers failed")
    ),
    tag = "Sms"
)]
pub async fn send_sms_handler(
    Extension(dispatcher): Extension<Arc<NotificationDispatcher>>,
    SimpleValidatedJson(body): SimpleValidatedJson<SendSmsRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = dispatch_sms(&dispatcher, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

/// Same contract as `/api/send-sms`, kept for clients using the older path.
#[utoipa::path(
    post,
    path = "/api/sms/send",
    request_body = SendSmsRequest,
    responses(
        (status = 200, description = "SMS dispatched", body = ApiResponse<bool>),
        (status = 400, description = "Phone number is not E.164"),
        (status = 500, description = "All SMS providers failed")
    ),
    tag = "Sms"
)]
pub async fn send_sms_alias_handler(
    Extension(dispatcher): Extension<Arc<NotificationDispatcher>>,
    SimpleValidatedJson(body): SimpleValidatedJson<SendSmsRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = dispatch_sms(&dispatcher, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn sms_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/send-sms", post(send_sms_handler))
        .route("/api/sms/send", post(send_sms_alias_handler))
        .layer(Extension(app_state.di_container.dispatcher.clone()))
        .with_state(app_state)
}
