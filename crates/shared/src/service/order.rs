use crate::{
    abstract_trait::{
        DynCartStore, DynOrderCommandRepository, DynOrderQueryRepository, DynUserQueryRepository,
        OrderServiceTrait,
    },
    domain::{
        requests::{CheckoutRequest, FeedbackRequest, FindAllOrders, UpdateOrderStatusRequest},
        responses::{
            ApiResponse, ApiResponsePagination, OrderDetailResponse, OrderResponse, Pagination,
        },
    },
    errors::ServiceError,
    events::{OrderEvent, OrderEventBus},
    model::{Order, OrderStatus},
    notification::NotificationDispatcher,
    utils::generate_rider_code,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

pub struct OrderService {
    query: DynOrderQueryRepository,
    command: DynOrderCommandRepository,
    user_query: DynUserQueryRepository,
    cart_store: DynCartStore,
    events: OrderEventBus,
    dispatcher: Arc<NotificationDispatcher>,
}

impl OrderService {
    pub fn new(
        query: DynOrderQueryRepository,
        command: DynOrderCommandRepository,
        user_query: DynUserQueryRepository,
        cart_store: DynCartStore,
        events: OrderEventBus,
        dispatcher: Arc<NotificationDispatcher>,
    ) -> Self {
        Self {
            query,
            command,
            user_query,
            cart_store,
            events,
            dispatcher,
        }
    }

    fn publish(&self, order: &Order) {
        self.events.publish(OrderEvent {
            order_id: order.order_id,
            status: order.status,
            paid: order.paid,
            version: order.version,
        });
    }

    async fn customer_phone(&self, customer_id: Uuid) -> Option<String> {
        match self.user_query.find_by_id(customer_id).await {
            Ok(user) => user.phone,
            Err(e) => {
                warn!("⚠️ Could not load customer {customer_id} for SMS: {e}");
                None
            }
        }
    }

    /// Best-effort fan-out after a committed write.
    async fn notify_status(&self, order: &Order) {
        let phone = self.customer_phone(order.customer_id).await;
        self.dispatcher
            .order_status_changed(order, phone.as_deref())
            .await;
    }
}

#[async_trait]
impl OrderServiceTrait for OrderService {
    async fn find_all(
        &self,
        req: &FindAllOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError> {
        let (orders, total) = self.query.find_all(req).await?;

        Ok(ApiResponsePagination::success(
            "Orders retrieved",
            orders.into_iter().map(Into::into).collect(),
            Pagination::new(req.page, req.page_size, total),
        ))
    }

    async fn find_for_customer(
        &self,
        customer_id: Uuid,
        req: &FindAllOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError> {
        let (orders, total) = self.query.find_by_customer(customer_id, req).await?;

        Ok(ApiResponsePagination::success(
            "Orders retrieved",
            orders.into_iter().map(Into::into).collect(),
            Pagination::new(req.page, req.page_size, total),
        ))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<OrderDetailResponse>, ServiceError> {
        let order = self.query.find_by_id(id).await?;
        let items = self.query.find_items(id).await?;

        Ok(ApiResponse::success(
            "Order retrieved",
            OrderDetailResponse {
                order: order.into(),
                items: items.into_iter().map(Into::into).collect(),
            },
        ))
    }

    async fn checkout(
        &self,
        customer_id: Uuid,
        req: &CheckoutRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("🛒 Checkout for customer {customer_id}");

        let cart = self.cart_store.get(customer_id).await?;
        if cart.is_empty() {
            return Err(ServiceError::Validation(vec!["Cart is empty".into()]));
        }

        let order = self.command.create_order(customer_id, req, &cart).await?;

        // the order exists now, a failed cart clear only leaves a stale cart
        if let Err(e) = self.cart_store.clear(customer_id).await {
            warn!("⚠️ Failed to clear cart for {customer_id}: {e}");
        }

        self.publish(&order);
        self.notify_status(&order).await;

        info!("✅ Order {} placed, total {}", order.order_id, order.total);
        Ok(ApiResponse::success("Order placed", order.into()))
    }

    async fn update_status(
        &self,
        id: Uuid,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let current = self.query.find_by_id(id).await?;

        if !current.status.can_transition_to(req.status) {
            return Err(ServiceError::InvalidTransition(format!(
                "Cannot move order from {} to {}",
                current.status, req.status
            )));
        }

        let rider_code =
            if req.status == OrderStatus::OutForDelivery && current.rider_code.is_none() {
                let code =
                    generate_rider_code().map_err(|e| ServiceError::Internal(e.to_string()))?;
                Some(code)
            } else {
                None
            };

        let order = self
            .command
            .update_status(id, current.status, req.status, rider_code)
            .await?;

        self.publish(&order);
        self.notify_status(&order).await;

        info!("🚚 Order {id} moved to {}", order.status);
        Ok(ApiResponse::success("Order status updated", order.into()))
    }

    async fn cancel(
        &self,
        id: Uuid,
        customer_id: Uuid,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let current = self.query.find_by_id(id).await?;

        if current.customer_id != customer_id {
            return Err(ServiceError::Forbidden("This is not your order".into()));
        }

        if !current.status.allows_customer_cancel() {
            return Err(ServiceError::InvalidTransition(format!(
                "Order can no longer be cancelled from {}",
                current.status
            )));
        }

        let order = self
            .command
            .update_status(id, current.status, OrderStatus::Cancelled, None)
            .await?;

        self.publish(&order);
        self.notify_status(&order).await;

        info!("✅ Order {id} cancelled by customer");
        Ok(ApiResponse::success("Order cancelled", order.into()))
    }

    async fn mark_paid(&self, id: Uuid) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self.command.mark_paid(id).await?;

        self.publish(&order);

        let phone = self.customer_phone(order.customer_id).await;
        self.dispatcher.order_paid(&order, phone.as_deref()).await;

        info!("💳 Order {id} marked as paid");
        Ok(ApiResponse::success("Order marked as paid", order.into()))
    }

    async fn submit_feedback(
        &self,
        id: Uuid,
        customer_id: Uuid,
        req: &FeedbackRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let current = self.query.find_by_id(id).await?;

        if current.customer_id != customer_id {
            return Err(ServiceError::Forbidden("This is not your order".into()));
        }

        if current.status != OrderStatus::Delivered {
            return Err(ServiceError::InvalidTransition(
                "Feedback is only accepted for delivered orders".into(),
            ));
        }

        let order = self
            .command
            .record_feedback(id, req.rating, req.comment.clone())
            .await?;

        info!("⭐ Feedback recorded for order {id}");
        Ok(ApiResponse::success("Feedback recorded", order.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            CartStoreTrait, EmailServiceTrait, OrderCommandRepositoryTrait,
            OrderQueryRepositoryTrait, SmsProviderTrait, UserQueryRepositoryTrait,
        },
        domain::requests::{Cart, CartAction, CartLine},
        errors::RepositoryError,
        model::{OrderItem, PaymentMethod, User, UserRole},
        utils::EmailTemplateData,
    };
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct NullSms;

    #[async_trait]
    impl SmsProviderTrait for NullSms {
        fn name(&self) -> &'static str {
            "null"
        }
        async fn send(&self, _to: &str, _message: &str) -> Result<(), ServiceError> {
            Ok(())
        }
    }

    struct NullEmail;

    #[async_trait]
    impl EmailServiceTrait for NullEmail {
        async fn send(
            &self,
            _to: &str,
            _subject: &str,
            _data: &EmailTemplateData,
        ) -> Result<(), ServiceError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct InMemoryOrders {
        orders: Mutex<HashMap<Uuid, Order>>,
    }

    impl InMemoryOrders {
        fn seed(&self, order: Order) {
            self.orders.lock().unwrap().insert(order.order_id, order);
        }
    }

    #[async_trait]
    impl OrderQueryRepositoryTrait for InMemoryOrders {
        async fn find_all(
            &self,
            _req: &FindAllOrders,
        ) -> Result<(Vec<Order>, i64), RepositoryError> {
            let orders: Vec<Order> = self.orders.lock().unwrap().values().cloned().collect();
            let total = orders.len() as i64;
            Ok((orders, total))
        }

        async fn find_by_customer(
            &self,
            customer_id: Uuid,
            _req: &FindAllOrders,
        ) -> Result<(Vec<Order>, i64), RepositoryError> {
            let orders: Vec<Order> = self
                .orders
                .lock()
                .unwrap()
                .values()
                .filter(|o| o.customer_id == customer_id)
                .cloned()
                .collect();
            let total = orders.len() as i64;
            Ok((orders, total))
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Order, RepositoryError> {
            self.orders
                .lock()
                .unwrap()
                .get(&id)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        }

        async fn find_items(&self, _order_id: Uuid) -> Result<Vec<OrderItem>, RepositoryError> {
            Ok(Vec::new())
        }
    }

    #[async_trait]
    impl OrderCommandRepositoryTrait for InMemoryOrders {
        async fn create_order(
            &self,
            customer_id: Uuid,
            req: &CheckoutRequest,
            cart: &Cart,
        ) -> Result<Order, RepositoryError> {
            let order = Order {
                order_id: Uuid::new_v4(),
                customer_id,
                branch_id: req.branch_id,
                status: OrderStatus::Pending,
                paid: false,
                payment_method: req.payment_method,
                total: cart.subtotal() + req.delivery_fee,
                delivery_fee: req.delivery_fee,
                rider_code: None,
                feedback_rating: None,
                feedback_comment: None,
                feedback_at: None,
                version: 1,
                created_at: None,
                updated_at: None,
            };
            self.seed(order.clone());
            Ok(order)
        }

        async fn update_status(
            &self,
            id: Uuid,
            expected: OrderStatus,
            status: OrderStatus,
            rider_code: Option<String>,
        ) -> Result<Order, RepositoryError> {
            let mut orders = self.orders.lock().unwrap();
            let order = orders.get_mut(&id).ok_or(RepositoryError::NotFound)?;
            if order.status != expected {
                return Err(RepositoryError::Conflict(format!(
                    "Order moved to {} while the update was in flight",
                    order.status
                )));
            }
            order.status = status;
            if rider_code.is_some() {
                order.rider_code = rider_code;
            }
            order.version += 1;
            Ok(order.clone())
        }

        async fn mark_paid(&self, id: Uuid) -> Result<Order, RepositoryError> {
            let mut orders = self.orders.lock().unwrap();
            let order = orders.get_mut(&id).ok_or(RepositoryError::NotFound)?;
            order.paid = true;
            order.version += 1;
            Ok(order.clone())
        }

        async fn record_feedback(
            &self,
            id: Uuid,
            rating: i32,
            comment: Option<String>,
        ) -> Result<Order, RepositoryError> {
            let mut orders = self.orders.lock().unwrap();
            let order = orders.get_mut(&id).ok_or(RepositoryError::NotFound)?;
            if order.feedback_at.is_some() {
                return Err(RepositoryError::Conflict(
                    "Feedback already recorded".into(),
                ));
            }
            order.feedback_rating = Some(rating);
            order.feedback_comment = comment;
            order.feedback_at = Some(chrono::Utc::now().naive_utc());
            order.version += 1;
            Ok(order.clone())
        }
    }

    #[derive(Default)]
    struct InMemoryCart {
        cart: Mutex<Cart>,
    }

    #[async_trait]
    impl CartStoreTrait for InMemoryCart {
        async fn get(&self, _customer_id: Uuid) -> Result<Cart, ServiceError> {
            Ok(self.cart.lock().unwrap().clone())
        }

        async fn apply(&self, _customer_id: Uuid, action: CartAction) -> Result<Cart, ServiceError> {
            let mut cart = self.cart.lock().unwrap();
            cart.apply(action);
            Ok(cart.clone())
        }

        async fn clear(&self, _customer_id: Uuid) -> Result<(), ServiceError> {
            self.cart.lock().unwrap().lines.clear();
            Ok(())
        }
    }

    struct KnownUser;

    #[async_trait]
    impl UserQueryRepositoryTrait for KnownUser {
        async fn find_by_id(&self, id: Uuid) -> Result<User, RepositoryError> {
            Ok(User {
                user_id: id,
                name: "Ada".into(),
                email: "ada@example.com".into(),
                phone: Some("+2348012345678".into()),
                verified: true,
                role: UserRole::User,
                password: String::new(),
                created_at: None,
                updated_at: None,
            })
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, RepositoryError> {
            Ok(None)
        }
    }

    /// Query half that reports a status snapshot taken before a concurrent
    /// writer landed, while the command half sees the current row.
    struct StaleReads {
        inner: Arc<InMemoryOrders>,
        seen: OrderStatus,
    }

    #[async_trait]
    impl OrderQueryRepositoryTrait for StaleReads {
        async fn find_all(
            &self,
            req: &FindAllOrders,
        ) -> Result<(Vec<Order>, i64), RepositoryError> {
            self.inner.find_all(req).await
        }

        async fn find_by_customer(
            &self,
            customer_id: Uuid,
            req: &FindAllOrders,
        ) -> Result<(Vec<Order>, i64), RepositoryError> {
            self.inner.find_by_customer(customer_id, req).await
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Order, RepositoryError> {
            let mut order = self.inner.find_by_id(id).await?;
            order.status = self.seen;
            Ok(order)
        }

        async fn find_items(&self, order_id: Uuid) -> Result<Vec<OrderItem>, RepositoryError> {
            self.inner.find_items(order_id).await
        }
    }

    fn null_dispatcher() -> Arc<NotificationDispatcher> {
        Arc::new(NotificationDispatcher::new(
            Arc::new(NullSms),
            Arc::new(NullEmail),
            "admin@quickbite.test".into(),
            None,
        ))
    }

    struct Fixture {
        repo: Arc<InMemoryOrders>,
        cart: Arc<InMemoryCart>,
        service: OrderService,
    }

    fn fixture() -> Fixture {
        let repo = Arc::new(InMemoryOrders::default());
        let cart = Arc::new(InMemoryCart::default());

        let service = OrderService::new(
            repo.clone(),
            repo.clone(),
            Arc::new(KnownUser),
            cart.clone(),
            OrderEventBus::new(16),
            null_dispatcher(),
        );

        Fixture { repo, cart, service }
    }

    fn seeded_order(repo: &InMemoryOrders, customer_id: Uuid, status: OrderStatus) -> Uuid {
        let id = Uuid::new_v4();
        repo.seed(Order {
            order_id: id,
            customer_id,
            branch_id: Uuid::new_v4(),
            status,
            paid: false,
            payment_method: PaymentMethod::Cash,
            total: 3000,
            delivery_fee: 500,
            rider_code: None,
            feedback_rating: None,
            feedback_comment: None,
            feedback_at: None,
            version: 1,
            created_at: None,
            updated_at: None,
        });
        id
    }

    fn checkout_request() -> CheckoutRequest {
        CheckoutRequest {
            branch_id: Uuid::new_v4(),
            payment_method: PaymentMethod::Card,
            delivery_fee: 500,
        }
    }

    #[tokio::test]
    async fn checkout_with_empty_cart_is_rejected() {
        let f = fixture();

        let err = f
            .service
            .checkout(Uuid::new_v4(), &checkout_request())
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn checkout_clears_the_cart_and_totals_it() {
        let f = fixture();
        f.cart.cart.lock().unwrap().lines.push(CartLine {
            menu_item_id: Uuid::new_v4(),
            name: "Jollof rice".into(),
            unit_price: 1500,
            quantity: 2,
        });

        let res = f
            .service
            .checkout(Uuid::new_v4(), &checkout_request())
            .await
            .unwrap();

        assert_eq!(res.data.total, 3500);
        assert_eq!(res.data.status, OrderStatus::Pending);
        assert!(f.cart.cart.lock().unwrap().lines.is_empty());
    }

    #[tokio::test]
    async fn illegal_transition_is_rejected() {
        let f = fixture();
        let id = seeded_order(&f.repo, Uuid::new_v4(), OrderStatus::Pending);

        let err = f
            .service
            .update_status(
                id,
                &UpdateOrderStatusRequest {
                    status: OrderStatus::Delivered,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidTransition(_)));
    }

    #[tokio::test]
    async fn rider_code_is_assigned_when_leaving_for_delivery() {
        let f = fixture();
        let id = seeded_order(&f.repo, Uuid::new_v4(), OrderStatus::Preparing);

        let res = f
            .service
            .update_status(
                id,
                &UpdateOrderStatusRequest {
                    status: OrderStatus::OutForDelivery,
                },
            )
            .await
            .unwrap();

        let code = res.data.rider_code.unwrap();
        assert_eq!(code.len(), 6);
    }

    #[tokio::test]
    async fn customer_cannot_cancel_once_out_for_delivery() {
        let f = fixture();
        let customer = Uuid::new_v4();
        let id = seeded_order(&f.repo, customer, OrderStatus::OutForDelivery);

        let err = f.service.cancel(id, customer).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidTransition(_)));
    }

    #[tokio::test]
    async fn customer_cannot_cancel_someone_elses_order() {
        let f = fixture();
        let id = seeded_order(&f.repo, Uuid::new_v4(), OrderStatus::Pending);

        let err = f.service.cancel(id, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Forbidden(_)));
    }

    #[tokio::test]
    async fn paid_flag_is_independent_of_status() {
        let f = fixture();
        let id = seeded_order(&f.repo, Uuid::new_v4(), OrderStatus::Pending);

        let res = f.service.mark_paid(id).await.unwrap();

        assert!(res.data.paid);
        assert_eq!(res.data.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn feedback_requires_delivery_and_happens_once() {
        let f = fixture();
        let customer = Uuid::new_v4();
        let pending = seeded_order(&f.repo, customer, OrderStatus::Pending);
        let delivered = seeded_order(&f.repo, customer, OrderStatus::Delivered);

        let req = FeedbackRequest {
            rating: 5,
            comment: Some("Great suya".into()),
        };

        let err = f
            .service
            .submit_feedback(pending, customer, &req)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidTransition(_)));

        f.service
            .submit_feedback(delivered, customer, &req)
            .await
            .unwrap();

        let err = f
            .service
            .submit_feedback(delivered, customer, &req)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn racing_writer_cannot_resurrect_a_cancelled_order() {
        // Both sides read the order as pending; the cancel won the write.
        let repo = Arc::new(InMemoryOrders::default());
        let id = seeded_order(&repo, Uuid::new_v4(), OrderStatus::Cancelled);

        let stale = Arc::new(StaleReads {
            inner: repo.clone(),
            seen: OrderStatus::Pending,
        });

        let service = OrderService::new(
            stale,
            repo.clone(),
            Arc::new(KnownUser),
            Arc::new(InMemoryCart::default()),
            OrderEventBus::new(16),
            null_dispatcher(),
        );

        let err = service
            .update_status(
                id,
                &UpdateOrderStatusRequest {
                    status: OrderStatus::Confirmed,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::Conflict(_))
        ));
        assert_eq!(
            repo.orders.lock().unwrap()[&id].status,
            OrderStatus::Cancelled
        );
    }

    #[tokio::test]
    async fn feedback_on_a_missing_order_is_not_found() {
        let f = fixture();

        let err = f
            .service
            .submit_feedback(
                Uuid::new_v4(),
                Uuid::new_v4(),
                &FeedbackRequest {
                    rating: 4,
                    comment: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn every_mutation_bumps_the_version() {
        let f = fixture();
        let id = seeded_order(&f.repo, Uuid::new_v4(), OrderStatus::Pending);

        let confirmed = f
            .service
            .update_status(
                id,
                &UpdateOrderStatusRequest {
                    status: OrderStatus::Confirmed,
                },
            )
            .await
            .unwrap();
        assert_eq!(confirmed.data.version, 2);

        let paid = f.service.mark_paid(id).await.unwrap();
        assert_eq!(paid.data.version, 3);
    }
}
