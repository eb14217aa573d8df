mod auth;
mod menu_item;
mod order;
mod restaurant;

pub use self::auth::AuthService;
pub use self::menu_item::MenuItemService;
pub use self::order::OrderService;
pub use self::restaurant::RestaurantService;
