use crate::model::Schedule;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllRestaurants {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRestaurantRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Mama Put Kitchen")]
    pub name: String,

    #[validate(length(min = 1, message = "Category is required"))]
    #[schema(example = "Nigerian")]
    pub category: String,

    pub schedule: Schedule,

    #[validate(range(min = 1, max = 240, message = "Delivery time must be 1-240 minutes"))]
    #[schema(example = 35)]
    pub delivery_time_minutes: i32,

    #[validate(url(message = "Invalid logo URL"))]
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRestaurantRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Category must not be empty"))]
    pub category: Option<String>,

    pub schedule: Option<Schedule>,

    #[validate(range(min = 1, max = 240, message = "Delivery time must be 1-240 minutes"))]
    pub delivery_time_minutes: Option<i32>,

    #[validate(url(message = "Invalid logo URL"))]
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct DeliveryEstimateQuery {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude out of range"))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude out of range"))]
    pub lng: f64,
}
