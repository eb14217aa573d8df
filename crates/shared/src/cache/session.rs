use crate::{
    abstract_trait::{GuestSession, GuestSessionStoreTrait},
    cache::CacheStore,
    errors::ServiceError,
};
use async_trait::async_trait;
use chrono::Duration;

const SESSION_TTL_DAYS: i64 = 30;

/// Phone-keyed guest record: the server-side counterpart of the client's
/// persisted phone number + verification flag.
#[derive(Clone)]
pub struct GuestSessionStore {
    cache: CacheStore,
}

impl GuestSessionStore {
    pub fn new(cache: CacheStore) -> Self {
        Self { cache }
    }

    fn key(phone: &str) -> String {
        format!("guest:{phone}")
    }
}

#[async_trait]
impl GuestSessionStoreTrait for GuestSessionStore {
    async fn get(&self, phone: &str) -> Result<Option<GuestSession>, ServiceError> {
        self.cache
            .get::<GuestSession>(&Self::key(phone))
            .await
    }

    async fn put(&self, session: &GuestSession) -> Result<(), ServiceError> {
        self.cache
            .set(
                &Self::key(&session.phone),
                session,
                Duration::days(SESSION_TTL_DAYS),
            )
            .await
    }
}
