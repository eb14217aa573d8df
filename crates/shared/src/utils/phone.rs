use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

static E164_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").expect("E.164 pattern is valid"));

pub fn is_e164(phone: &str) -> bool {
    E164_RE.is_match(phone)
}

pub fn validate_e164(phone: &str) -> Result<(), ValidationError> {
    if is_e164(phone) {
        Ok(())
    } else {
        Err(ValidationError::new("e164")
            .with_message("Phone number must be in E.164 format, e.g. +2348012345678".into()))
    }
}
