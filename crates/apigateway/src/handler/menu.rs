use crate::{
    middleware::{auth_middleware, ensure_admin, ensure_vendor, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use shared::{
    abstract_trait::DynMenuItemService,
    config::TokenClaims,
    domain::{
        requests::{CreateMenuItemRequest, UpdateMenuItemRequest},
        responses::{ApiResponse, MenuItemResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/restaurants/{id}/menu",
    params(("id" = Uuid, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Approved menu items for a restaurant", body = ApiResponse<Vec<MenuItemResponse>>)
    ),
    tag = "Menu"
)]
pub async fn get_menu(
    Extension(service): Extension<DynMenuItemService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.menu_for_restaurant(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/menu/featured",
    responses(
        (status = 200, description = "Featured items", body = ApiResponse<Vec<MenuItemResponse>>)
    ),
    tag = "Menu"
)]
pub async fn get_featured_items(
    Extension(service): Extension<DynMenuItemService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.featured().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/menu/popular",
    responses(
        (status = 200, description = "Popular items", body = ApiResponse<Vec<MenuItemResponse>>)
    ),
    tag = "Menu"
)]
pub async fn get_popular_items(
    Extension(service): Extension<DynMenuItemService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.popular().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/menu",
    request_body = CreateMenuItemRequest,
    responses(
        (status = 200, description = "Menu item created, pending approval", body = ApiResponse<MenuItemResponse>),
        (status = 403, description = "Not the restaurant owner")
    ),
    security(("bearer_auth" = [])),
    tag = "Menu"
)]
pub async fn create_menu_item(
    Extension(service): Extension<DynMenuItemService>,
    Extension(claims): Extension<TokenClaims>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateMenuItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    ensure_vendor(&claims)?;

    let response = service.create(claims.user_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/menu/{id}",
    params(("id" = Uuid, Path, description = "Menu item id")),
    request_body = UpdateMenuItemRequest,
    responses(
        (status = 200, description = "Menu item updated", body = ApiResponse<MenuItemResponse>),
        (status = 403, description = "Not the restaurant owner")
    ),
    security(("bearer_auth" = [])),
    tag = "Menu"
)]
pub async fn update_menu_item(
    Extension(service): Extension<DynMenuItemService>,
    Extension(claims): Extension<TokenClaims>,
    Path(id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateMenuItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    ensure_vendor(&claims)?;

    let response = service.update(id, claims.user_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/menu/{id}/approve",
    params(("id" = Uuid, Path, description = "Menu item id")),
    responses(
        (status = 200, description = "Menu item approved", body = ApiResponse<MenuItemResponse>),
        (status = 403, description = "Admin privileges required")
    ),
    security(("bearer_auth" = [])),
    tag = "Menu"
)]
pub async fn approve_menu_item(
    Extension(service): Extension<DynMenuItemService>,
    Extension(claims): Extension<TokenClaims>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    ensure_admin(&claims)?;

    let response = service.approve(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn menu_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/api/restaurants/{id}/menu", get(get_menu))
        .route("/api/menu/featured", get(get_featured_items))
        .route("/api/menu/popular", get(get_popular_items))
        .layer(Extension(app_state.di_container.menu_item_service.clone()));

    let private_routes = OpenApiRouter::new()
        .route("/api/menu", post(create_menu_item))
        .route("/api/menu/{id}", put(update_menu_item))
        .route("/api/menu/{id}/approve", post(approve_menu_item))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.menu_item_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()));

    public_routes.merge(private_routes).with_state(app_state)
}
