use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VendorStatus {
    Approved,
    Rejected,
    Pending,
}

/// Body of `POST /api/vendor/send-notifications` (camelCase wire format).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VendorNotificationRequest {
    #[validate(email(message = "Invalid vendor email"))]
    pub vendor_email: String,

    #[validate(length(min = 1, message = "Vendor name is required"))]
    pub vendor_name: String,

    #[validate(length(min = 1, message = "Business name is required"))]
    pub business_name: String,

    pub status: Option<VendorStatus>,
}
