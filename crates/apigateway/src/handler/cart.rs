use crate::{middleware::auth_middleware, state::AppState};
use axum::{
    Extension, Json,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post},
};
use shared::{
    abstract_trait::DynCartStore,
    config::TokenClaims,
    domain::{
        requests::{Cart, CartAction},
        responses::ApiResponse,
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Current cart", body = ApiResponse<Cart>)
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn get_cart(
    Extension(store): Extension<DynCartStore>,
    Extension(claims): Extension<TokenClaims>,
) -> Result<impl IntoResponse, HttpError> {
    let cart = store.get(claims.user_id).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Cart retrieved", cart)),
    ))
}

#[utoipa::path(
    post,
    path = "/api/cart/actions",
    request_body = CartAction,
    responses(
        (status = 200, description = "Cart after the action was applied", body = ApiResponse<Cart>)
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn apply_cart_action(
    Extension(store): Extension<DynCartStore>,
    Extension(claims): Extension<TokenClaims>,
    Json(action): Json<CartAction>,
) -> Result<impl IntoResponse, HttpError> {
    let cart = store.apply(claims.user_id, action).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Cart updated", cart)),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart emptied", body = ApiResponse<bool>)
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn clear_cart(
    Extension(store): Extension<DynCartStore>,
    Extension(claims): Extension<TokenClaims>,
) -> Result<impl IntoResponse, HttpError> {
    store.clear(claims.user_id).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Cart cleared", true)),
    ))
}

pub fn cart_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/cart", get(get_cart))
        .route("/api/cart", delete(clear_cart))
        .route("/api/cart/actions", post(apply_cart_action))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.cart_store.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
        .with_state(app_state)
}
