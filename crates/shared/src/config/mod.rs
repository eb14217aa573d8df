mod database;
mod hashing;
mod jwt;
mod myconfig;
mod redis;

pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::hashing::Hashing;
pub use self::jwt::{JwtConfig, TokenClaims};
pub use self::myconfig::{Config, EmailConfig, SmsConfig, SmsProviderKind};
pub use self::redis::{RedisClient, RedisConfig};
