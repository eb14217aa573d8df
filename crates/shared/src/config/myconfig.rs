use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub smtp_server: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_pass: String,
    pub admin_email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmsProviderKind {
    Twilio,
    Termii,
}

impl SmsProviderKind {
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "twilio" => Ok(SmsProviderKind::Twilio),
            "termii" => Ok(SmsProviderKind::Termii),
            other => Err(anyhow!(
                "SMS_PRIMARY_PROVIDER must be 'twilio' or 'termii', got '{other}'"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SmsConfig {
    pub primary: SmsProviderKind,
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_from_number: String,
    pub termii_api_key: String,
    pub termii_sender_id: String,
    /// Optional destination for admin copies of operational SMS.
    pub admin_phone: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub email: EmailConfig,
    pub sms: SmsConfig,
    pub maps_api_key: String,
    pub payment_public_key: String,
}

/// Collects every absent variable before failing so a misconfigured
/// deployment reports the whole list at once.
struct EnvReader<F> {
    lookup: F,
    missing: Vec<String>,
}

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn new(lookup: F) -> Self {
        Self {
            lookup,
            missing: Vec::new(),
        }
    }

    fn required(&mut self, key: &str) -> String {
        match (self.lookup)(key) {
            Some(value) => value,
            None => {
                self.missing.push(key.to_string());
                String::new()
            }
        }
    }

    fn optional(&self, key: &str, default: &str) -> String {
        (self.lookup)(key).unwrap_or_else(|| default.to_string())
    }

    fn finish(self) -> Result<()> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(anyhow!(
                "Missing environment variables: {}",
                self.missing.join(", ")
            ))
        }
    }
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut env = EnvReader::new(lookup);

        let database_url = env.required("DATABASE_URL");
        let redis_url = env.required("REDIS_URL");
        let jwt_secret = env.required("JWT_SECRET");
        let port_str = env.required("PORT");

        let smtp_host = env.required("SMTP_HOST");
        let smtp_user = env.required("SMTP_USERNAME");
        let smtp_pass = env.required("SMTP_PASSWORD");
        let admin_email = env.required("ADMIN_EMAIL");
        let smtp_port_str = env.optional("SMTP_PORT", "587");

        let sms_primary = env.required("SMS_PRIMARY_PROVIDER");
        let twilio_account_sid = env.required("TWILIO_ACCOUNT_SID");
        let twilio_auth_token = env.required("TWILIO_AUTH_TOKEN");
        let twilio_from_number = env.required("TWILIO_FROM_NUMBER");
        let termii_api_key = env.required("TERMII_API_KEY");
        let termii_sender_id = env.required("TERMII_SENDER_ID");
        let admin_phone = env.optional("ADMIN_PHONE", "");

        let maps_api_key = env.required("MAPS_API_KEY");
        let payment_public_key = env.required("PAYMENT_PUBLIC_KEY");

        env.finish()?;

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let smtp_port = smtp_port_str
            .parse::<u16>()
            .context("SMTP_PORT must be a valid u16 integer")?;

        let primary = SmsProviderKind::parse(&sms_primary)?;

        Ok(Self {
            database_url,
            redis_url,
            jwt_secret,
            port,
            email: EmailConfig {
                smtp_server: smtp_host,
                smtp_port,
                smtp_user,
                smtp_pass,
                admin_email,
            },
            sms: SmsConfig {
                primary,
                twilio_account_sid,
                twilio_auth_token,
                twilio_from_number,
                termii_api_key,
                termii_sender_id,
                admin_phone: (!admin_phone.is_empty()).then_some(admin_phone),
            },
            maps_api_key,
            payment_public_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("DATABASE_URL", "postgres://localhost/quickbite"),
            ("REDIS_URL", "redis://localhost:6379/0"),
            ("JWT_SECRET", "secret"),
            ("PORT", "5000"),
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USERNAME", "mailer"),
            ("SMTP_PASSWORD", "hunter2"),
            ("ADMIN_EMAIL", "admin@quickbite.test"),
            ("SMS_PRIMARY_PROVIDER", "twilio"),
            ("TWILIO_ACCOUNT_SID", "AC123"),
            ("TWILIO_AUTH_TOKEN", "token"),
            ("TWILIO_FROM_NUMBER", "+15550001111"),
            ("TERMII_API_KEY", "tk"),
            ("TERMII_SENDER_ID", "QuickBite"),
            ("MAPS_API_KEY", "maps"),
            ("PAYMENT_PUBLIC_KEY", "pk_test"),
        ])
    }

    #[test]
    fn loads_full_configuration() {
        let env = full_env();
        let config = Config::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.email.smtp_port, 587);
        assert_eq!(config.sms.primary, SmsProviderKind::Twilio);
    }

    #[test]
    fn reports_every_missing_variable() {
        let mut env = full_env();
        env.remove("DATABASE_URL");
        env.remove("TWILIO_AUTH_TOKEN");
        env.remove("PAYMENT_PUBLIC_KEY");

        let err = Config::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap_err();
        let msg = err.to_string();

        assert!(msg.contains("DATABASE_URL"));
        assert!(msg.contains("TWILIO_AUTH_TOKEN"));
        assert!(msg.contains("PAYMENT_PUBLIC_KEY"));
    }

    #[test]
    fn rejects_unknown_sms_provider() {
        let mut env = full_env();
        env.insert("SMS_PRIMARY_PROVIDER", "pigeon");

        let err = Config::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap_err();
        assert!(err.to_string().contains("SMS_PRIMARY_PROVIDER"));
    }

    #[test]
    fn rejects_invalid_port() {
        let mut env = full_env();
        env.insert("PORT", "not-a-port");

        assert!(Config::from_lookup(|k| env.get(k).map(|v| v.to_string())).is_err());
    }
}
