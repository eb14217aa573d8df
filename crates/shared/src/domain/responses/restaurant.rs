use crate::model::{Restaurant, Schedule};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RestaurantResponse {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub name: String,
    pub category: String,
    pub schedule: Schedule,
    pub rating: f64,
    pub delivery_time_minutes: i32,
    pub logo_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(value: Restaurant) -> Self {
        RestaurantResponse {
            id: value.restaurant_id,
            vendor_id: value.vendor_id,
            name: value.name,
            category: value.category,
            schedule: value.schedule.0,
            rating: value.rating,
            delivery_time_minutes: value.delivery_time_minutes,
            logo_url: value.logo_url,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}
