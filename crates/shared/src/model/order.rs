use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Lifecycle states. The only legal moves are the ones encoded in
/// `can_transition_to`: the linear pending → confirmed → preparing →
/// out_for_delivery → delivered chain, plus cancellation from any state
/// that is not yet out for delivery.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "order_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;

        match (self, next) {
            (Pending, Confirmed) => true,
            (Confirmed, Preparing) => true,
            (Preparing, OutForDelivery) => true,
            (OutForDelivery, Delivered) => true,
            (Pending | Confirmed | Preparing, Cancelled) => true,
            _ => false,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Cancellation is only offered to the customer before the courier
    /// leaves with the order.
    pub fn allows_customer_cancel(self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::Confirmed | OrderStatus::Preparing
        )
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "payment_method", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Cash,
    Transfer,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub order_id: Uuid,
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
    pub feedback_at: Option<NaiveDateTime>,
    pub version: i64,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Order {
    pub fn has_feedback(&self) -> bool {
        self.feedback_at.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    pub order_item_id: Uuid,
    pub order_id: Uuid,
    pub menu_item_id: Uuid,
    pub quantity: i32,
    pub unit_price: i64,
}

#[cfg(test)]
mod tests {
    use super::OrderStatus::*;
    use super::*;

    const ALL: [OrderStatus; 6] = [
        Pending,
        Confirmed,
        Preparing,
        OutForDelivery,
        Delivered,
        Cancelled,
    ];

    #[test]
    fn forward_chain_is_allowed() {
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Confirmed.can_transition_to(Preparing));
        assert!(Preparing.can_transition_to(OutForDelivery));
        assert!(OutForDelivery.can_transition_to(Delivered));
    }

    #[test]
    fn no_state_skipping_except_into_cancelled() {
        for from in ALL {
            for to in ALL {
                if !from.can_transition_to(to) {
                    continue;
                }
                let forward = matches!(
                    (from, to),
                    (Pending, Confirmed)
                        | (Confirmed, Preparing)
                        | (Preparing, OutForDelivery)
                        | (OutForDelivery, Delivered)
                );
                assert!(
                    forward || to == Cancelled,
                    "unexpected edge {from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn cancellation_edges() {
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Cancelled));
        assert!(Preparing.can_transition_to(Cancelled));
        assert!(!OutForDelivery.can_transition_to(Cancelled));
        assert!(!Delivered.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Cancelled));
    }

    #[test]
    fn terminal_states_have_no_outgoing_edges() {
        for to in ALL {
            assert!(!Delivered.can_transition_to(to));
            assert!(!Cancelled.can_transition_to(to));
        }
        assert!(Delivered.is_terminal());
        assert!(Cancelled.is_terminal());
        assert!(!Preparing.is_terminal());
    }

    #[test]
    fn customer_cancel_window() {
        assert!(Pending.allows_customer_cancel());
        assert!(Confirmed.allows_customer_cancel());
        assert!(Preparing.allows_customer_cancel());
        assert!(!OutForDelivery.allows_customer_cancel());
        assert!(!Delivered.allows_customer_cancel());
        assert!(!Cancelled.allows_customer_cancel());
    }

    #[test]
    fn no_reverse_transitions() {
        assert!(!Confirmed.can_transition_to(Pending));
        assert!(!Preparing.can_transition_to(Confirmed));
        assert!(!OutForDelivery.can_transition_to(Preparing));
        assert!(!Delivered.can_transition_to(OutForDelivery));
    }
}
