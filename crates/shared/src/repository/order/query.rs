use crate::{
    abstract_trait::OrderQueryRepositoryTrait, config::ConnectionPool,
    domain::requests::FindAllOrders, errors::RepositoryError,
    model::{Order, OrderItem},
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    fn page_bounds(req: &FindAllOrders) -> (i64, i64) {
        let limit = req.page_size.max(1) as i64;
        let offset = ((req.page - 1).max(0) * req.page_size.max(1)) as i64;
        (limit, offset)
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(&self, req: &FindAllOrders) -> Result<(Vec<Order>, i64), RepositoryError> {
        info!("🔍 Fetching all orders with search: {:?}", req.search);

        let (limit, offset) = Self::page_bounds(req);

        let search_pattern = if req.search.trim().is_empty() {
            None
        } else {
            Some(format!("%{}%", req.search.trim()))
        };

        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT *
            FROM orders
            WHERE ($1::TEXT IS NULL OR status::TEXT ILIKE $1 OR rider_code ILIKE $1)
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(search_pattern.as_deref())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch orders: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM orders
            WHERE ($1::TEXT IS NULL OR status::TEXT ILIKE $1 OR rider_code ILIKE $1)
            "#,
        )
        .bind(search_pattern.as_deref())
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok((orders, total))
    }

    async fn find_by_customer(
        &self,
        customer_id: Uuid,
        req: &FindAllOrders,
    ) -> Result<(Vec<Order>, i64), RepositoryError> {
        info!("🔍 Fetching orders for customer {customer_id}");

        let (limit, offset) = Self::page_bounds(req);

        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT *
            FROM orders
            WHERE customer_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(customer_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch customer orders: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE customer_id = $1")
                .bind(customer_id)
                .fetch_one(&self.db)
                .await
                .map_err(RepositoryError::from)?;

        Ok((orders, total))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Order, RepositoryError> {
        let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE order_id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch order {id}: {:?}", e);
                RepositoryError::from(e)
            })?;

        order.ok_or(RepositoryError::NotFound)
    }

    async fn find_items(&self, order_id: Uuid) -> Result<Vec<OrderItem>, RepositoryError> {
        sqlx::query_as::<_, OrderItem>(
            "SELECT * FROM order_items WHERE order_id = $1 ORDER BY order_item_id",
        )
        .bind(order_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch order items for {order_id}: {:?}", e);
            RepositoryError::from(e)
        })
    }
}
