mod email;
mod hashing;
mod jwt;
mod menu_item;
mod order;
mod restaurant;
mod sms;
mod store;
mod user;

pub use self::email::{DynEmailService, EmailServiceTrait};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::menu_item::{
    DynMenuItemCommandRepository, DynMenuItemQueryRepository, DynMenuItemService,
    MenuItemCommandRepositoryTrait, MenuItemQueryRepositoryTrait, MenuItemServiceTrait,
};
pub use self::order::{
    DynOrderCommandRepository, DynOrderQueryRepository, DynOrderService,
    OrderCommandRepositoryTrait, OrderQueryRepositoryTrait, OrderServiceTrait,
};
pub use self::restaurant::{
    DynRestaurantCommandRepository, DynRestaurantQueryRepository, DynRestaurantService,
    RestaurantCommandRepositoryTrait, RestaurantQueryRepositoryTrait, RestaurantServiceTrait,
};
pub use self::sms::{DynSmsProvider, SmsProviderTrait};
pub use self::store::{
    CartStoreTrait, DynCartStore, DynGuestSessionStore, GuestSession, GuestSessionStoreTrait,
};
pub use self::user::{
    AuthServiceTrait, DynAuthService, DynUserCommandRepository, DynUserQueryRepository,
    UserCommandRepositoryTrait, UserQueryRepositoryTrait,
};
