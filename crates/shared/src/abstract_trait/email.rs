use crate::{errors::ServiceError, utils::EmailTemplateData};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynEmailService = Arc<dyn EmailServiceTrait + Send + Sync>;

#[async_trait]
pub trait EmailServiceTrait {
    async fn send(
        &self,
        to: &str,
        subject: &str,
        data: &EmailTemplateData,
    ) -> Result<(), ServiceError>;
}
