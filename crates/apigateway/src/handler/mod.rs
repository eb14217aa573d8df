mod auth;
mod cart;
mod menu;
mod order;
mod restaurant;
mod rider;
mod session;
mod sms;
mod vendor;

use crate::state::AppState;
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::auth::auth_routes;
pub use self::cart::cart_routes;
pub use self::menu::menu_routes;
pub use self::order::order_routes;
pub use self::restaurant::restaurant_routes;
pub use self::rider::rider_routes;
pub use self::session::{get_guest_session, put_guest_session, session_routes};
pub use self::sms::{send_sms_alias_handler, send_sms_handler, sms_routes};
pub use self::vendor::vendor_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register_user_handler,
        auth::login_user_handler,
        auth::get_me_handler,
        auth::update_profile_handler,

        restaurant::get_restaurants,
        restaurant::get_restaurant,
        restaurant::delivery_estimate_handler,
        restaurant::create_restaurant,
        restaurant::update_restaurant,

        menu::get_menu,
        menu::get_featured_items,
        menu::get_popular_items,
        menu::create_menu_item,
        menu::update_menu_item,
        menu::approve_menu_item,

        cart::get_cart,
        cart::apply_cart_action,
        cart::clear_cart,

        order::get_orders,
        order::get_my_orders,
        order::get_order,
        order::checkout_handler,
        order::update_order_status,
        order::cancel_order,
        order::pay_order,
        order::submit_feedback,

        sms::send_sms_handler,
        sms::send_sms_alias_handler,
        rider::become_a_rider_handler,
        vendor::send_vendor_notifications,

        session::get_guest_session,
        session::put_guest_session,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Restaurant", description = "Restaurant browsing and vendor management"),
        (name = "Menu", description = "Menu item endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Order", description = "Order lifecycle endpoints"),
        (name = "Sms", description = "SMS intake endpoints"),
        (name = "Rider", description = "Rider intake endpoints"),
        (name = "Vendor", description = "Vendor notification endpoints"),
        (name = "Session", description = "Guest session endpoints"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(utoipa::openapi::security::Http::new(
                    utoipa::openapi::security::HttpAuthScheme::Bearer,
                )),
            );
        }
    }
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> (axum::Router, utoipa::openapi::OpenApi) {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(auth_routes(shared_state.clone()))
            .merge(restaurant_routes(shared_state.clone()))
            .merge(menu_routes(shared_state.clone()))
            .merge(cart_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()))
            .merge(sms_routes(shared_state.clone()))
            .merge(rider_routes(shared_state.clone()))
            .merge(vendor_routes(shared_state.clone()))
            .merge(session_routes(shared_state));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024));

        router_with_layers.split_for_parts()
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let (app_router, api) = Self::build(app_state);

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📚 API Documentation available at:");
        println!("   📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
