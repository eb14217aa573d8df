use crate::model::MenuItemKind;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllMenuItems {
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
pub struct CreateMenuItemRequest {
    pub restaurant_id: Uuid,

    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Suya platter")]
    pub name: String,

    #[validate(range(min = 1, message = "Price must be positive"))]
    #[schema(example = 2500)]
    pub price: i64,

    pub description: Option<String>,

    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,

    pub kind: MenuItemKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMenuItemRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,

    #[validate(range(min = 1, message = "Price must be positive"))]
    pub price: Option<i64>,

    pub description: Option<String>,

    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,

    pub kind: Option<MenuItemKind>,
}
