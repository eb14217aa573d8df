use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "menu_item_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MenuItemKind {
    Regular,
    Featured,
    Popular,
}

/// Vendor-created items stay hidden from customers until approved.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MenuItem {
    pub menu_item_id: Uuid,
    pub restaurant_id: Uuid,
    pub name: String,
    pub price: i64,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub approved: bool,
    pub kind: MenuItemKind,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
