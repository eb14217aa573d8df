use crate::errors::ServiceError;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynSmsProvider = Arc<dyn SmsProviderTrait + Send + Sync>;

#[async_trait]
pub trait SmsProviderTrait {
    fn name(&self) -> &'static str;
    async fn send(&self, to: &str, message: &str) -> Result<(), ServiceError>;
}
