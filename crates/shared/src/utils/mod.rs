mod logs;
mod phone;
mod random_string;
mod shutdown;
mod template;

pub use self::logs::init_logger;
pub use self::phone::{is_e164, validate_e164};
pub use self::random_string::generate_rider_code;
pub use self::shutdown::shutdown_signal;
pub use self::template::{EmailTemplateData, render_email};
