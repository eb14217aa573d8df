mod dispatcher;
mod email;
pub mod sms;

pub use self::dispatcher::NotificationDispatcher;
pub use self::email::EmailService;
pub use self::sms::{SmsDispatcher, TermiiProvider, TwilioProvider};
