mod menu_item;
mod order;
mod restaurant;
mod user;

pub use self::menu_item::MenuItemRepository;
pub use self::order::OrderRepository;
pub use self::restaurant::RestaurantRepository;
pub use self::user::UserRepository;
