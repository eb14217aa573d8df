use crate::{
    domain::{
        requests::{Cart, CheckoutRequest, FeedbackRequest, FindAllOrders, UpdateOrderStatusRequest},
        responses::{ApiResponse, ApiResponsePagination, OrderDetailResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Order, OrderItem, OrderStatus},
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderService = Arc<dyn OrderServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all(&self, req: &FindAllOrders) -> Result<(Vec<Order>, i64), RepositoryError>;
    async fn find_by_customer(
        &self,
        customer_id: Uuid,
        req: &FindAllOrders,
    ) -> Result<(Vec<Order>, i64), RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
    async fn find_items(&self, order_id: Uuid) -> Result<Vec<OrderItem>, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn create_order(
        &self,
        customer_id: Uuid,
        req: &CheckoutRequest,
        cart: &Cart,
    ) -> Result<Order, RepositoryError>;
    /// Compare-and-swap: the row is only updated while its status still
    /// equals `expected`; a concurrent writer surfaces as `Conflict`.
    async fn update_status(
        &self,
        id: Uuid,
        expected: OrderStatus,
        status: OrderStatus,
        rider_code: Option<String>,
    ) -> Result<Order, RepositoryError>;
    async fn mark_paid(&self, id: Uuid) -> Result<Order, RepositoryError>;
    async fn record_feedback(
        &self,
        id: Uuid,
        rating: i32,
        comment: Option<String>,
    ) -> Result<Order, RepositoryError>;
}

#[async_trait]
pub trait OrderServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError>;
    async fn find_for_customer(
        &self,
        customer_id: Uuid,
        req: &FindAllOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<OrderDetailResponse>, ServiceError>;
    async fn checkout(
        &self,
        customer_id: Uuid,
        req: &CheckoutRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn update_status(
        &self,
        id: Uuid,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn cancel(
        &self,
        id: Uuid,
        customer_id: Uuid,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn mark_paid(&self, id: Uuid) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn submit_feedback(
        &self,
        id: Uuid,
        customer_id: Uuid,
        req: &FeedbackRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}
