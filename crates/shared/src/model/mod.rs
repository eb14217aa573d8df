mod branch;
mod menu_item;
mod order;
mod restaurant;
mod user;

pub use self::branch::Branch;
pub use self::menu_item::{MenuItem, MenuItemKind};
pub use self::order::{Order, OrderItem, OrderStatus, PaymentMethod};
pub use self::restaurant::{DaySchedule, Restaurant, Schedule};
pub use self::user::{User, UserRole};
