use crate::utils::validate_e164;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body of `POST /api/send-sms` and `POST /api/sms/send`. Field names are
/// camelCase on the wire, matching the public intake contract.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsRequest {
    #[validate(custom(function = "validate_e164"))]
    #[schema(example = "+2348012345678")]
    pub phone_number: String,

    #[validate(length(min = 1, max = 1600, message = "Message is required"))]
    pub message: String,

    /// When set, a copy with `admin_message` is also dispatched to the
    /// configured admin number.
    pub admin: Option<bool>,

    #[validate(length(max = 1600, message = "Admin message too long"))]
    pub admin_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn deserializes_camel_case_body() {
        let body = r#"{"phoneNumber":"+2348012345678","message":"Your order is on the way","admin":true,"adminMessage":"Order 42 dispatched"}"#;

        let req: SendSmsRequest = serde_json::from_str(body).unwrap();

        assert_eq!(req.phone_number, "+2348012345678");
        assert_eq!(req.admin, Some(true));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn rejects_local_format_numbers() {
        let req = SendSmsRequest {
            phone_number: "08012345678".into(),
            message: "hi".into(),
            admin: None,
            admin_message: None,
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_empty_message() {
        let req = SendSmsRequest {
            phone_number: "+2348012345678".into(),
            message: String::new(),
            admin: None,
            admin_message: None,
        };

        assert!(req.validate().is_err());
    }
}
