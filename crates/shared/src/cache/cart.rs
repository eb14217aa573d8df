use crate::{
    abstract_trait::CartStoreTrait,
    cache::CacheStore,
    domain::requests::{Cart, CartAction},
    errors::ServiceError,
};
use async_trait::async_trait;
use chrono::Duration;
use tracing::info;
use uuid::Uuid;

const CART_TTL_DAYS: i64 = 7;

/// Redis-backed cart. The stored value is only ever replaced with the result
/// of `Cart::apply`, so every mutation is one of the defined actions.
#[derive(Clone)]
pub struct CartStore {
    cache: CacheStore,
}

impl CartStore {
    pub fn new(cache: CacheStore) -> Self {
        Self { cache }
    }

    fn key(customer_id: Uuid) -> String {
        format!("cart:{customer_id}")
    }
}

#[async_trait]
impl CartStoreTrait for CartStore {
    async fn get(&self, customer_id: Uuid) -> Result<Cart, ServiceError> {
        Ok(self
            .cache
            .get::<Cart>(&Self::key(customer_id))
            .await?
            .unwrap_or_default())
    }

    async fn apply(&self, customer_id: Uuid, action: CartAction) -> Result<Cart, ServiceError> {
        let key = Self::key(customer_id);

        let mut cart = self.cache.get::<Cart>(&key).await?.unwrap_or_default();

        info!("🛒 Applying cart action for customer {customer_id}");
        cart.apply(action);

        self.cache
            .set(&key, &cart, Duration::days(CART_TTL_DAYS))
            .await?;

        Ok(cart)
    }

    async fn clear(&self, customer_id: Uuid) -> Result<(), ServiceError> {
        self.cache.delete(&Self::key(customer_id)).await
    }
}
