use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{
    Extension, Json, http::StatusCode, response::IntoResponse, routing::post,
};
use shared::{
    domain::{requests::RiderApplicationRequest, responses::ApiResponse},
    errors::HttpError,
    notification::NotificationDispatcher,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/become-a-rider",
    request_body = RiderApplicationRequest,
    responses(
        (status = 200, description = "Application received", body = ApiResponse<bool>),
        (status = 400, description = "Missing or invalid fields"),
        (status = 500, description = "Notification emails could not be sent")
    ),
    tag = "Rider"
)]
pub async fn become_a_rider_handler(
    Extension(dispatcher): Extension<Arc<NotificationDispatcher>>,
    SimpleValidatedJson(body): SimpleValidatedJson<RiderApplicationRequest>,
) -> Result<impl IntoResponse, HttpError> {
    dispatcher
        .rider_application(&body)
        .await
        .map_err(HttpError::from)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Application received", true)),
    ))
}

pub fn rider_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/become-a-rider", post(become_a_rider_handler))
        .layer(Extension(app_state.di_container.dispatcher.clone()))
        .with_state(app_state)
}
