pub mod jwt;
pub mod validate;

pub use self::jwt::{auth_middleware, ensure_admin, ensure_vendor};
pub use self::validate::SimpleValidatedJson;
