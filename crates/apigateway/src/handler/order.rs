use crate::{
    middleware::{auth_middleware, ensure_admin, ensure_vendor, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use shared::{
    abstract_trait::DynOrderService,
    config::TokenClaims,
    domain::{
        requests::{CheckoutRequest, FeedbackRequest, FindAllOrders, UpdateOrderStatusRequest},
        responses::{ApiResponse, ApiResponsePagination, OrderDetailResponse, OrderResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/orders",
    params(FindAllOrders),
    responses(
        (status = 200, description = "All orders", body = ApiResponsePagination<Vec<OrderResponse>>),
        (status = 403, description = "Admin privileges required")
    ),
    security(("bearer_auth" = [])),
    tag = "Order"
)]
pub async fn get_orders(
    Extension(service): Extension<DynOrderService>,
    Extension(claims): Extension<TokenClaims>,
    Query(params): Query<FindAllOrders>,
) -> Result<impl IntoResponse, HttpError> {
    ensure_admin(&claims)?;

    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/mine",
    params(FindAllOrders),
    responses(
        (status = 200, description = "Orders of the current customer", body = ApiResponsePagination<Vec<OrderResponse>>)
    ),
    security(("bearer_auth" = [])),
    tag = "Order"
)]
pub async fn get_my_orders(
    Extension(service): Extension<DynOrderService>,
    Extension(claims): Extension<TokenClaims>,
    Query(params): Query<FindAllOrders>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_for_customer(claims.user_id, &params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = Uuid, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order with its line items", body = ApiResponse<OrderDetailResponse>),
        (status = 404, description = "Order not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Order"
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/checkout",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Order placed from the current cart", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Cart is empty")
    ),
    security(("bearer_auth" = [])),
    tag = "Order"
)]
pub async fn checkout_handler(
    Extension(service): Extension<DynOrderService>,
    Extension(claims): Extension<TokenClaims>,
    SimpleValidatedJson(body): SimpleValidatedJson<CheckoutRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.checkout(claims.user_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}/status",
    params(("id" = Uuid, Path, description = "Order id")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Order status updated", body = ApiResponse<OrderResponse>),
        (status = 409, description = "Illegal status transition")
    ),
    security(("bearer_auth" = [])),
    tag = "Order"
)]
pub async fn update_order_status(
    Extension(service): Extension<DynOrderService>,
    Extension(claims): Extension<TokenClaims>,
    Path(id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateOrderStatusRequest>,
) -> Result<impl IntoResponse, HttpError> {
    ensure_vendor(&claims)?;

    let response = service.update_status(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/orders/{id}/cancel",
    params(("id" = Uuid, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order cancelled", body = ApiResponse<OrderResponse>),
        (status = 409, description = "Order can no longer be cancelled")
    ),
    security(("bearer_auth" = [])),
    tag = "Order"
)]
pub async fn cancel_order(
    Extension(service): Extension<DynOrderService>,
    Extension(claims): Extension<TokenClaims>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.cancel(id, claims.user_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/orders/{id}/pay",
    params(("id" = Uuid, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order marked as paid", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Order"
)]
pub async fn pay_order(
    Extension(service): Extension<DynOrderService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.mark_paid(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/orders/{id}/feedback",
    params(("id" = Uuid, Path, description = "Order id")),
    request_body = FeedbackRequest,
    responses(
        (status = 200, description = "Feedback recorded", body = ApiResponse<OrderResponse>),
        (status = 409, description = "Feedback already recorded or order not delivered")
    ),
    security(("bearer_auth" = [])),
    tag = "Order"
)]
pub async fn submit_feedback(
    Extension(service): Extension<DynOrderService>,
    Extension(claims): Extension<TokenClaims>,
    Path(id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<FeedbackRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.submit_feedback(id, claims.user_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/orders", get(get_orders))
        .route("/api/orders/mine", get(get_my_orders))
        .route("/api/orders/{id}", get(get_order))
        .route("/api/checkout", post(checkout_handler))
        .route("/api/orders/{id}/status", put(update_order_status))
        .route("/api/orders/{id}/cancel", post(cancel_order))
        .route("/api/orders/{id}/pay", post(pay_order))
        .route("/api/orders/{id}/feedback", post(submit_feedback))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.order_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
        .with_state(app_state)
}
