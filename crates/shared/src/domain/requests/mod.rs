mod auth;
mod cart;
mod menu_item;
mod order;
mod restaurant;
mod rider;
mod sms;
mod user;
mod vendor;

pub use self::auth::{LoginRequest, RegisterRequest};
pub use self::cart::{Cart, CartAction, CartLine};
pub use self::menu_item::{CreateMenuItemRequest, FindAllMenuItems, UpdateMenuItemRequest};
pub use self::order::{
    CheckoutRequest, FeedbackRequest, FindAllOrders, UpdateOrderStatusRequest,
};
pub use self::restaurant::{
    CreateRestaurantRequest, DeliveryEstimateQuery, FindAllRestaurants, UpdateRestaurantRequest,
};
pub use self::rider::RiderApplicationRequest;
pub use self::sms::SendSmsRequest;
pub use self::user::{GuestSessionRequest, UpdateProfileRequest};
pub use self::vendor::{VendorNotificationRequest, VendorStatus};
