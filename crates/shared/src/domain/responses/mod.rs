mod api;
mod delivery;
mod menu_item;
mod order;
mod restaurant;
mod user;

pub use self::api::{ApiResponse, ApiResponsePagination, Pagination};
pub use self::delivery::DeliveryEstimateResponse;
pub use self::menu_item::MenuItemResponse;
pub use self::order::{OrderDetailResponse, OrderItemResponse, OrderResponse};
pub use self::restaurant::RestaurantResponse;
pub use self::user::{GuestSessionResponse, TokenResponse, UserResponse};
