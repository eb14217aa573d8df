mod termii;
mod twilio;

pub use self::termii::TermiiProvider;
pub use self::twilio::TwilioProvider;

use crate::{abstract_trait::{DynSmsProvider, SmsProviderTrait}, errors::ServiceError};
use async_trait::async_trait;
use tracing::{error, warn};

/// Routes through the configured primary provider and falls back to the
/// secondary when the primary fails. The two providers are interchangeable.
pub struct SmsDispatcher {
    primary: DynSmsProvider,
    fallback: DynSmsProvider,
}

impl SmsDispatcher {
    pub fn new(primary: DynSmsProvider, fallback: DynSmsProvider) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl SmsProviderTrait for SmsDispatcher {
    fn name(&self) -> &'static str {
        "dispatcher"
    }

    async fn send(&self, to: &str, message: &str) -> Result<(), ServiceError> {
        match self.primary.send(to, message).await {
            Ok(()) => Ok(()),
            Err(primary_err) => {
                warn!(
                    "⚠️ SMS via {} failed, trying {}: {primary_err}",
                    self.primary.name(),
                    self.fallback.name()
                );

                self.fallback.send(to, message).await.map_err(|fallback_err| {
                    error!(
                        "❌ SMS fallback via {} also failed: {fallback_err}",
                        self.fallback.name()
                    );
                    ServiceError::Notification(format!(
                        "All SMS providers failed: {primary_err}; {fallback_err}"
                    ))
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedProvider {
        name: &'static str,
        fail: bool,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl SmsProviderTrait for FixedProvider {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn send(&self, _to: &str, _message: &str) -> Result<(), ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(ServiceError::Notification("provider down".into()))
            } else {
                Ok(())
            }
        }
    }

    fn provider(name: &'static str, fail: bool) -> Arc<FixedProvider> {
        Arc::new(FixedProvider {
            name,
            fail,
            calls: AtomicUsize::new(0),
        })
    }

    #[tokio::test]
    async fn primary_success_skips_fallback() {
        let primary = provider("a", false);
        let fallback = provider("b", false);
        let dispatcher = SmsDispatcher::new(primary.clone(), fallback.clone());

        dispatcher.send("+2348012345678", "hi").await.unwrap();

        assert_eq!(primary.calls.load(Ordering::SeqCst), 1);
        assert_eq!(fallback.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn falls_back_when_primary_fails() {
        let primary = provider("a", true);
        let fallback = provider("b", false);
        let dispatcher = SmsDispatcher::new(primary.clone(), fallback.clone());

        dispatcher.send("+2348012345678", "hi").await.unwrap();

        assert_eq!(fallback.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn errors_when_both_providers_fail() {
        let dispatcher = SmsDispatcher::new(provider("a", true), provider("b", true));

        let err = dispatcher.send("+2348012345678", "hi").await.unwrap_err();
        assert!(err.to_string().contains("All SMS providers failed"));
    }
}
