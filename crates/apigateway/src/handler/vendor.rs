use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{
    Extension, Json, http::StatusCode, response::IntoResponse, routing::post,
};
use shared::{
    domain::{requests::VendorNotificationRequest, responses::ApiResponse},
    errors::HttpError,
    notification::NotificationDispatcher,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/vendor/send-notifications",
    request_body = VendorNotificationRequest,
    responses(
        (status = 200, description = "Notification sent", body = ApiResponse<bool>),
        (status = 400, description = "Missing or invalid fields"),
        (status = 500, description = "Email could not be sent")
    ),
    tag = "Vendor"
)]
pub async fn send_vendor_notifications(
    Extension(dispatcher): Extension<Arc<NotificationDispatcher>>,
    SimpleValidatedJson(body): SimpleValidatedJson<VendorNotificationRequest>,
) -> Result<impl IntoResponse, HttpError> {
    dispatcher
        .vendor_status(&body)
        .await
        .map_err(HttpError::from)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Notification sent", true)),
    ))
}

pub fn vendor_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/vendor/send-notifications", post(send_vendor_notifications))
        .layer(Extension(app_state.di_container.dispatcher.clone()))
        .with_state(app_state)
}
