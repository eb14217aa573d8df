use crate::model::{Order, OrderItem, OrderStatus, PaymentMethod};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub branch_id: Uuid,
    pub status: OrderStatus,
    pub paid: bool,
    pub payment_method: PaymentMethod,
    pub total: i64,
    pub delivery_fee: i64,
    pub rider_code: Option<String>,
    pub feedback_rating: Option<i32>,
    pub feedback_comment: Option<String>,
    pub version: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        OrderResponse {
            id: value.order_id,
            customer_id: value.customer_id,
            branch_id: value.branch_id,
            status: value.status,
            paid: value.paid,
            payment_method: value.payment_method,
            total: value.total,
            delivery_fee: value.delivery_fee,
            rider_code: value.rider_code,
            feedback_rating: value.feedback_rating,
            feedback_comment: value.feedback_comment,
            version: value.version,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderItemResponse {
    pub id: Uuid,
    pub menu_item_id: Uuid,
    pub quantity: i32,
    pub unit_price: i64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(value: OrderItem) -> Self {
        OrderItemResponse {
            id: value.order_item_id,
            menu_item_id: value.menu_item_id,
            quantity: value.quantity,
            unit_price: value.unit_price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderDetailResponse {
    #[serde(flatten)]
    pub order: OrderResponse,
    pub items: Vec<OrderItemResponse>,
}
