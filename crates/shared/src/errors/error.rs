use serde::Serialize;
use utoipa::ToSchema;

/// JSON error envelope: `status` is "error" for server faults and "fail"
/// for request faults, mirroring the success envelope's `status` field.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".into(),
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: "fail".into(),
            message: message.into(),
        }
    }
}
