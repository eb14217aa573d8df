use crate::{
    middleware::{auth_middleware, ensure_vendor, validate::SimpleValidatedJson},
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
    abstract_trait::DynRestaurantService,
    config::TokenClaims,
    domain::{
        requests::{
            CreateRestaurantRequest, DeliveryEstimateQuery, FindAllRestaurants,
            UpdateRestaurantRequest,
        },
        responses::{
            ApiResponse, ApiResponsePagination, DeliveryEstimateResponse, RestaurantResponse,
        },
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/restaurants",
    params(FindAllRestaurants),
    responses(
        (status = 200, description = "List restaurants", body = ApiResponsePagination<Vec<RestaurantResponse>>)
    ),
    tag = "Restaurant"
)]
pub async fn get_restaurants(
    Extension(service): Extension<DynRestaurantService>,
    Query(params): Query<FindAllRestaurants>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/restaurants/{id}",
    params(("id" = Uuid, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Restaurant detail", body = ApiResponse<RestaurantResponse>),
        (status = 404, description = "Restaurant not found")
    ),
    tag = "Restaurant"
)]
pub async fn get_restaurant(
    Extension(service): Extension<DynRestaurantService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/restaurants/{id}/delivery-estimate",
    params(
        ("id" = Uuid, Path, description = "Restaurant id"),
        DeliveryEstimateQuery
    ),
    responses(
        (status = 200, description = "Estimated delivery time from the nearest branch", body = ApiResponse<DeliveryEstimateResponse>),
        (status = 404, description = "Restaurant has no branches")
    ),
    tag = "Restaurant"
)]
pub async fn delivery_estimate_handler(
    Extension(service): Extension<DynRestaurantService>,
    Path(id): Path<Uuid>,
    Query(params): Query<DeliveryEstimateQuery>,
) -> Result<impl IntoResponse, HttpError> {
    params
        .validate()
        .map_err(|e| HttpError::BadRequest(e.to_string()))?;

    let response = service.delivery_estimate(id, &params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/restaurants",
    request_body = CreateRestaurantRequest,
    responses(
        (status = 200, description = "Restaurant created", body = ApiResponse<RestaurantResponse>),
        (status = 403, description = "Vendor privileges required")
    ),
    security(("bearer_auth" = [])),
    tag = "Restaurant"
)]
pub async fn create_restaurant(
    Extension(service): Extension<DynRestaurantService>,
    Extension(claims): Extension<TokenClaims>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateRestaurantRequest>,
) -> Result<impl IntoResponse, HttpError> {
    ensure_vendor(&claims)?;

    let response = service.create(claims.user_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/restaurants/{id}",
    params(("id" = Uuid, Path, description = "Restaurant id")),
    request_body = UpdateRestaurantRequest,
    responses(
        (status = 200, description = "Restaurant updated", body = ApiResponse<RestaurantResponse>),
        (status = 403, description = "Not the owner")
    ),
    security(("bearer_auth" = [])),
    tag = "Restaurant"
)]
pub async fn update_restaurant(
    Extension(service): Extension<DynRestaurantService>,
    Extension(claims): Extension<TokenClaims>,
    Path(id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateRestaurantRequest>,
) -> Result<impl IntoResponse, HttpError> {
    ensure_vendor(&claims)?;

    let response = service.update(id, claims.user_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn restaurant_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/api/restaurants", get(get_restaurants))
        .route("/api/restaurants/{id}", get(get_restaurant))
        .route(
            "/api/restaurants/{id}/delivery-estimate",
            get(delivery_estimate_handler),
        )
        .layer(Extension(app_state.di_container.restaurant_service.clone()));

    let private_routes = OpenApiRouter::new()
        .route("/api/restaurants", post(create_restaurant))
        .route("/api/restaurants/{id}", put(update_restaurant))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.restaurant_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()));

    public_routes.merge(private_routes).with_state(app_state)
}
