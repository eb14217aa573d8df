use anyhow::{Context, Result};
use deadpool_redis::{Pool, Runtime};
use redis::Client;
use tracing::info;

#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
}

impl RedisConfig {
    pub fn new(url: String) -> Self {
        Self { url }
    }
}

#[derive(Clone)]
pub struct RedisClient {
    pub client: Client,
    pub pool: Pool,
}

impl RedisClient {
    pub fn new(config: &RedisConfig) -> Result<Self> {
        info!("Creating redis client");

        let client = Client::open(config.url.as_str())?;

        let pool = deadpool_redis::Config::from_url(&config.url)
            .create_pool(Some(Runtime::Tokio1))
            .context("Failed to create redis pool")?;

        Ok(Self { client, pool })
    }

    pub fn ping(&self) -> Result<()> {
        let mut conn = self.client.get_connection()?;

        info!("Pinging redis");

        let _: () = redis::cmd("PING").query(&mut conn)?;

        info!("Pinged redis");

        Ok(())
    }
}
