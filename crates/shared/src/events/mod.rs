use crate::model::OrderStatus;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::broadcast;
use tracing::debug;
use uuid::Uuid;

/// Published on every order mutation. `version` is the order's monotonic
/// write counter, so consumers can detect reordered delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderEvent {
    pub order_id: Uuid,
    pub status: OrderStatus,
    pub paid: bool,
    pub version: i64,
}

#[derive(Clone)]
pub struct OrderEventBus {
    tx: broadcast::Sender<OrderEvent>,
}

impl OrderEventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn publish(&self, event: OrderEvent) {
        // no receivers is fine, the write already happened
        if self.tx.send(event.clone()).is_err() {
            debug!("No subscribers for order event {:?}", event.order_id);
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
        self.tx.subscribe()
    }
}

impl Default for OrderEventBus {
    fn default() -> Self {
        Self::new(256)
    }
}

/// Drops events that arrive out of order: an event is applied only when its
/// version is strictly greater than the last applied version for that order.
#[derive(Default)]
pub struct VersionGate {
    last_applied: Mutex<HashMap<Uuid, i64>>,
}

impl VersionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&self, event: &OrderEvent) -> bool {
        let mut last = self
            .last_applied
            .lock()
            .expect("version gate lock poisoned");

        let entry = last.entry(event.order_id).or_insert(0);
        if event.version > *entry {
            *entry = event.version;
            true
        } else {
            debug!(
                "Dropping stale event for order {} (version {} <= {})",
                event.order_id, event.version, *entry
            );
            false
        }
    }

    pub fn last_applied(&self, order_id: Uuid) -> Option<i64> {
        self.last_applied
            .lock()
            .expect("version gate lock poisoned")
            .get(&order_id)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(order_id: Uuid, status: OrderStatus, version: i64) -> OrderEvent {
        OrderEvent {
            order_id,
            status,
            paid: false,
            version,
        }
    }

    #[test]
    fn applies_monotonically_increasing_versions() {
        let gate = VersionGate::new();
        let id = Uuid::new_v4();

        assert!(gate.apply(&event(id, OrderStatus::Pending, 1)));
        assert!(gate.apply(&event(id, OrderStatus::Confirmed, 2)));
        assert_eq!(gate.last_applied(id), Some(2));
    }

    #[test]
    fn drops_stale_and_duplicate_versions() {
        let gate = VersionGate::new();
        let id = Uuid::new_v4();

        assert!(gate.apply(&event(id, OrderStatus::Preparing, 3)));
        // reordered delivery of an older write
        assert!(!gate.apply(&event(id, OrderStatus::Confirmed, 2)));
        // duplicate delivery
        assert!(!gate.apply(&event(id, OrderStatus::Preparing, 3)));
        assert_eq!(gate.last_applied(id), Some(3));
    }

    #[test]
    fn orders_are_gated_independently() {
        let gate = VersionGate::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        assert!(gate.apply(&event(a, OrderStatus::Delivered, 5)));
        assert!(gate.apply(&event(b, OrderStatus::Pending, 1)));
        assert_eq!(gate.last_applied(a), Some(5));
        assert_eq!(gate.last_applied(b), Some(1));
    }

    #[tokio::test]
    async fn bus_delivers_to_subscribers() {
        let bus = OrderEventBus::new(8);
        let mut rx = bus.subscribe();
        let id = Uuid::new_v4();

        bus.publish(event(id, OrderStatus::Confirmed, 2));

        let received = rx.recv().await.unwrap();
        assert_eq!(received.order_id, id);
        assert_eq!(received.version, 2);
    }
}
