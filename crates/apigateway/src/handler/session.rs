use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{
    Extension, Json,
    extract::Query,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use shared::{
    abstract_trait::{DynGuestSessionStore, GuestSession},
    domain::{
        requests::GuestSessionRequest,
        responses::{ApiResponse, GuestSessionResponse},
    },
    errors::HttpError,
    utils::is_e164,
};
use std::sync::Arc;
use utoipa::IntoParams;
use utoipa_axum::router::OpenApiRouter;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GuestSessionQuery {
    pub phone: String,
}

#[utoipa::path(
    get,
    path = "/api/guest-session",
    params(GuestSessionQuery),
    responses(
        (status = 200, description = "Stored session for the phone number", body = ApiResponse<GuestSessionResponse>),
        (status = 404, description = "No session for this phone number")
    ),
    tag = "Session"
)]
pub async fn get_guest_session(
    Extension(store): Extension<DynGuestSessionStore>,
    Query(query): Query<GuestSessionQuery>,
) -> Result<impl IntoResponse, HttpError> {
    if !is_e164(&query.phone) {
        return Err(HttpError::BadRequest(
            "Phone number must be E.164".to_string(),
        ));
    }

    let session = store
        .get(&query.phone)
        .await?
        .ok_or_else(|| HttpError::NotFound("No session for this phone number".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Session retrieved",
            GuestSessionResponse {
                phone: session.phone,
                verified: session.verified,
            },
        )),
    ))
}

#[utoipa::path(
    post,
    path = "/api/guest-session",
    request_body = GuestSessionRequest,
    responses(
        (status = 200, description = "Session stored", body = ApiResponse<GuestSessionResponse>),
        (status = 400, description = "Phone number is not E.164")
    ),
    tag = "Session"
)]
pub async fn put_guest_session(
    Extension(store): Extension<DynGuestSessionStore>,
    SimpleValidatedJson(body): SimpleValidatedJson<GuestSessionRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let session = GuestSession {
        phone: body.phone,
        verified: body.verified,
    };

    store.put(&session).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Session stored",
            GuestSessionResponse {
                phone: session.phone,
                verified: session.verified,
            },
        )),
    ))
}

pub fn session_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/guest-session", get(get_guest_session))
        .route("/api/guest-session", post(put_guest_session))
        .layer(Extension(app_state.di_container.guest_sessions.clone()))
        .with_state(app_state)
}
