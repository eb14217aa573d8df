mod cache_store;
mod cart;
mod session;

pub use self::cache_store::CacheStore;
pub use self::cart::CartStore;
pub use self::session::GuestSessionStore;
