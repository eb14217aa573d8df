use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A physical fulfillment location. Coordinates feed the delivery-time
/// estimate.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Branch {
    pub branch_id: Uuid,
    pub restaurant_id: Uuid,
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
}
