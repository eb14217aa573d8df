use crate::{abstract_trait::SmsProviderTrait, config::SmsConfig, errors::ServiceError};
use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info};

const TERMII_API_URL: &str = "https://api.ng.termii.com/api/sms/send";

pub struct TermiiProvider {
    client: reqwest::Client,
    api_key: String,
    sender_id: String,
}

impl TermiiProvider {
    pub fn new(config: &SmsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.termii_api_key.clone(),
            sender_id: config.termii_sender_id.clone(),
        }
    }
}

#[async_trait]
impl SmsProviderTrait for TermiiProvider {
    fn name(&self) -> &'static str {
        "termii"
    }

    async fn send(&self, to: &str, message: &str) -> Result<(), ServiceError> {
        let payload = json!({
            "to": to,
            "from": self.sender_id,
            "sms": message,
            "type": "plain",
            "channel": "generic",
            "api_key": self.api_key,
        });

        let response = self.client.post(TERMII_API_URL).json(&payload).send().await?;

        if response.status().is_success() {
            info!("✅ SMS sent to {to} via Termii");
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("❌ Termii rejected SMS to {to}: {status} {body}");
            Err(ServiceError::Notification(format!(
                "Termii returned {status}"
            )))
        }
    }
}
