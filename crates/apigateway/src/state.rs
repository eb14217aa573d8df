use anyhow::{Context, Result};
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{Config, ConnectionPool, Hashing, JwtConfig, RedisClient, RedisConfig},
    di::{DependenciesInject, DependenciesInjectDeps},
};
use std::{fmt, sync::Arc};
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: DynJwtService,
    pub di_container: DependenciesInject,
    pub redis: Arc<RedisClient>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .finish()
    }
}

impl AppState {
    pub async fn new(pool: ConnectionPool, config: Config) -> Result<Self> {
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;
        let hashing = Arc::new(Hashing::new()) as DynHashing;

        info!("Initializing Redis connection");
        let redis = RedisClient::new(&RedisConfig::new(config.redis_url.clone()))
            .context("Failed to connect to Redis")?;

        redis.ping().context("Failed to ping Redis server")?;

        let deps = DependenciesInjectDeps {
            pool,
            hash: hashing,
            jwt_config: jwt_config.clone(),
            redis: redis.clone(),
        };

        let di_container = DependenciesInject::new(deps, &config)
            .context("Failed to initialize dependency injection container")?;

        Ok(Self {
            jwt_config,
            di_container,
            redis: Arc::new(redis),
        })
    }
}
