use crate::{abstract_trait::SmsProviderTrait, config::SmsConfig, errors::ServiceError};
use async_trait::async_trait;
use tracing::{error, info};

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

pub struct TwilioProvider {
    client: reqwest::Client,
    account_sid: String,
    auth_token: String,
    from_number: String,
}

impl TwilioProvider {
    pub fn new(config: &SmsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            account_sid: config.twilio_account_sid.clone(),
            auth_token: config.twilio_auth_token.clone(),
            from_number: config.twilio_from_number.clone(),
        }
    }
}

#[async_trait]
impl SmsProviderTrait for TwilioProvider {
    fn name(&self) -> &'static str {
        "twilio"
    }

    async fn send(&self, to: &str, message: &str) -> Result<(), ServiceError> {
        let url = format!(
            "{TWILIO_API_BASE}/Accounts/{}/Messages.json",
            self.account_sid
        );

        let params = [
            ("To", to),
            ("From", self.from_number.as_str()),
            ("Body", message),
        ];

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&params)
            .send()
            .await?;

        if response.status().is_success() {
            info!("✅ SMS sent to {to} via Twilio");
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("❌ Twilio rejected SMS to {to}: {status} {body}");
            Err(ServiceError::Notification(format!(
                "Twilio returned {status}"
            )))
        }
    }
}
