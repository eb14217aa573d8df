use crate::utils::validate_e164;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_e164"))]
    pub phone: Option<String>,
}

/// Server-side counterpart of the client's persisted phone record, used to
/// prefill forms and as the SMS fallback destination.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct GuestSessionRequest {
    #[validate(custom(function = "validate_e164"))]
    #[schema(example = "+2348012345678")]
    pub phone: String,

    #[serde(default)]
    pub verified: bool,
}
