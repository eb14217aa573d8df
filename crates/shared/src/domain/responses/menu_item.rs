use crate::model::{MenuItem, MenuItemKind};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuItemResponse {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub name: String,
    pub price: i64,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub approved: bool,
    pub kind: MenuItemKind,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(value: MenuItem) -> Self {
        MenuItemResponse {
            id: value.menu_item_id,
            restaurant_id: value.restaurant_id,
            name: value.name,
            price: value.price,
            description: value.description,
            image_url: value.image_url,
            approved: value.approved,
            kind: value.kind,
        }
    }
}
