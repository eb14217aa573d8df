use crate::{
    domain::requests::{Cart, CartAction},
    errors::ServiceError,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

pub type DynCartStore = Arc<dyn CartStoreTrait + Send + Sync>;
pub type DynGuestSessionStore = Arc<dyn GuestSessionStoreTrait + Send + Sync>;

#[async_trait]
pub trait CartStoreTrait {
    async fn get(&self, customer_id: Uuid) -> Result<Cart, ServiceError>;
    async fn apply(&self, customer_id: Uuid, action: CartAction) -> Result<Cart, ServiceError>;
    async fn clear(&self, customer_id: Uuid) -> Result<(), ServiceError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestSession {
    pub phone: String,
    pub verified: bool,
}

#[async_trait]
pub trait GuestSessionStoreTrait {
    async fn get(&self, phone: &str) -> Result<Option<GuestSession>, ServiceError>;
    async fn put(&self, session: &GuestSession) -> Result<(), ServiceError>;
}
