use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeliveryEstimateResponse {
    pub branch_id: Uuid,
    pub branch_label: String,
    pub distance_km: f64,
    pub estimated_minutes: i32,
}
