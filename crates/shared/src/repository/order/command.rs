use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{Cart, CheckoutRequest},
    errors::RepositoryError,
    model::{Order, OrderStatus},
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(
        &self,
        customer_id: Uuid,
        req: &CheckoutRequest,
        cart: &Cart,
    ) -> Result<Order, RepositoryError> {
        info!("🛒 Creating order for customer {customer_id}");

        let total = cart.subtotal() + req.delivery_fee;

        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin transaction: {:?}", e);
            RepositoryError::from(e)
        })?;

        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (
                order_id, customer_id, branch_id, status, paid,
                payment_method, total, delivery_fee, version, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, FALSE, $5, $6, $7, 1, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(customer_id)
        .bind(req.branch_id)
        .bind(OrderStatus::Pending)
        .bind(req.payment_method)
        .bind(total)
        .bind(req.delivery_fee)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert order: {:?}", e);
            RepositoryError::from(e)
        })?;

        for line in &cart.lines {
            sqlx::query(
                r#"
                INSERT INTO order_items (order_item_id, order_id, menu_item_id, quantity, unit_price)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(order.order_id)
            .bind(line.menu_item_id)
            .bind(line.quantity)
            .bind(line.unit_price)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to insert order item: {:?}", e);
                RepositoryError::from(e)
            })?;
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        Ok(order)
    }

    async fn update_status(
        &self,
        id: Uuid,
        expected: OrderStatus,
        status: OrderStatus,
        rider_code: Option<String>,
    ) -> Result<Order, RepositoryError> {
        info!("🚚 Updating order {id} from {expected} to {status}");

        // status guard makes the legality check race-free: a writer that
        // landed after our read fails the WHERE instead of clobbering it
        let order = sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders
            SET status = $2,
                rider_code = COALESCE($3, rider_code),
                version = version + 1,
                updated_at = NOW()
            WHERE order_id = $1 AND status = $4
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(rider_code)
        .bind(expected)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update order status: {:?}", e);
            RepositoryError::from(e)
        })?;

        if let Some(order) = order {
            return Ok(order);
        }

        let actual: Option<OrderStatus> =
            sqlx::query_scalar("SELECT status FROM orders WHERE order_id = $1")
                .bind(id)
                .fetch_optional(&self.db)
                .await
                .map_err(RepositoryError::from)?;

        match actual {
            Some(actual) => Err(RepositoryError::Conflict(format!(
                "Order moved to {actual} while the update was in flight"
            ))),
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn mark_paid(&self, id: Uuid) -> Result<Order, RepositoryError> {
        info!("💳 Marking order {id} as paid");

        let order = sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders
            SET paid = TRUE,
                version = version + 1,
                updated_at = NOW()
            WHERE order_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to mark order paid: {:?}", e);
            RepositoryError::from(e)
        })?;

        order.ok_or(RepositoryError::NotFound)
    }

    async fn record_feedback(
        &self,
        id: Uuid,
        rating: i32,
        comment: Option<String>,
    ) -> Result<Order, RepositoryError> {
        info!("⭐ Recording feedback for order {id}");

        // feedback_at IS NULL keeps this at-most-once even under racing requests
        let order = sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders
            SET feedback_rating = $2,
                feedback_comment = $3,
                feedback_at = NOW(),
                version = version + 1,
                updated_at = NOW()
            WHERE order_id = $1 AND feedback_at IS NULL
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(rating)
        .bind(comment)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to record feedback: {:?}", e);
            RepositoryError::from(e)
        })?;

        if let Some(order) = order {
            return Ok(order);
        }

        let exists: Option<i32> = sqlx::query_scalar("SELECT 1 FROM orders WHERE order_id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        match exists {
            Some(_) => Err(RepositoryError::Conflict("Feedback already recorded".into())),
            None => Err(RepositoryError::NotFound),
        }
    }
}
