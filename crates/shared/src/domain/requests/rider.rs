use crate::utils::validate_e164;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body of `POST /api/become-a-rider` (camelCase wire format).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RiderApplicationRequest {
    #[validate(length(min = 1, message = "Full name is required"))]
    #[schema(example = "Chinedu Eze")]
    pub full_name: String,

    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "chinedu@example.com")]
    pub email: String,

    #[validate(custom(function = "validate_e164"))]
    #[schema(example = "+2348012345678")]
    pub phone: String,

    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,

    #[validate(length(min = 1, message = "License number is required"))]
    pub license_number: String,

    #[validate(length(min = 1, message = "Motorcycle model is required"))]
    pub motorcycle_model: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_body() {
        let body = r#"{
            "fullName": "Chinedu Eze",
            "email": "chinedu@example.com",
            "phone": "+2348012345678",
            "address": "12 Allen Avenue, Ikeja",
            "licenseNumber": "LAG-4411",
            "motorcycleModel": "Bajaj Boxer"
        }"#;

        let req: RiderApplicationRequest = serde_json::from_str(body).unwrap();

        assert_eq!(req.license_number, "LAG-4411");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn every_field_is_required() {
        let req = RiderApplicationRequest {
            full_name: String::new(),
            email: "not-an-email".into(),
            phone: "0801".into(),
            address: String::new(),
            license_number: String::new(),
            motorcycle_model: String::new(),
        };

        let errs = req.validate().unwrap_err();
        assert!(errs.field_errors().len() >= 5);
    }
}
