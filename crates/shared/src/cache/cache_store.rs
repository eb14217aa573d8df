use crate::errors::ServiceError;
use chrono::Duration;
use deadpool_redis::{Connection, Pool};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tracing::{debug, error};

/// JSON-over-Redis store backing the cart and guest-session records.
/// A missing key is `Ok(None)`; a Redis or codec failure is
/// `ServiceError::Cache`, so callers can tell a miss from an outage.
#[derive(Clone)]
pub struct CacheStore {
    redis_pool: Arc<Pool>,
}

impl CacheStore {
    pub fn new(redis_pool: Pool) -> Self {
        Self {
            redis_pool: Arc::new(redis_pool),
        }
    }

    async fn conn(&self) -> Result<Connection, ServiceError> {
        self.redis_pool.get().await.map_err(|e| {
            error!("❌ Failed to get Redis pooled connection: {e:?}");
            ServiceError::Cache(e.to_string())
        })
    }

    pub async fn get<T>(&self, key: &str) -> Result<Option<T>, ServiceError>
    where
        T: DeserializeOwned,
    {
        let mut conn = self.conn().await?;

        let raw: Option<String> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(|e| {
                error!("❌ Redis GET failed for key '{key}': {e:?}");
                ServiceError::Cache(e.to_string())
            })?;

        let Some(data) = raw else {
            debug!("Cache miss for key: {key}");
            return Ok(None);
        };

        let parsed = serde_json::from_str::<T>(&data).map_err(|e| {
            error!("❌ Corrupt cached value for key '{key}': {e:?}");
            ServiceError::Cache(format!("corrupt cached value for '{key}'"))
        })?;

        Ok(Some(parsed))
    }

    pub async fn set<T>(&self, key: &str, data: &T, ttl: Duration) -> Result<(), ServiceError>
    where
        T: Serialize,
    {
        let json_data = serde_json::to_string(data).map_err(|e| {
            error!("❌ Failed to serialize value for key '{key}': {e:?}");
            ServiceError::Cache(e.to_string())
        })?;

        let mut conn = self.conn().await?;

        redis::pipe()
            .cmd("SET")
            .arg(key)
            .arg(&json_data)
            .ignore()
            .cmd("EXPIRE")
            .arg(key)
            .arg(ttl.num_seconds())
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| {
                error!("❌ Redis SET failed for key '{key}': {e:?}");
                ServiceError::Cache(e.to_string())
            })?;

        debug!("Cached key '{key}' with TTL {ttl:?}");
        Ok(())
    }

    pub async fn delete(&self, key: &str) -> Result<(), ServiceError> {
        let mut conn = self.conn().await?;

        redis::cmd("DEL")
            .arg(key)
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| {
                error!("❌ Redis DEL failed for key '{key}': {e:?}");
                ServiceError::Cache(e.to_string())
            })
    }
}
