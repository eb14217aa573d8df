use crate::{
    abstract_trait::{
        DynAuthService, DynCartStore, DynEmailService, DynGuestSessionStore, DynHashing,
        DynJwtService, DynMenuItemService, DynOrderService, DynRestaurantService, DynSmsProvider,
    },
    cache::{CacheStore, CartStore, GuestSessionStore},
    config::{Config, ConnectionPool, RedisClient, SmsProviderKind},
    events::OrderEventBus,
    notification::{EmailService, NotificationDispatcher, SmsDispatcher, TermiiProvider, TwilioProvider},
    repository::{MenuItemRepository, OrderRepository, RestaurantRepository, UserRepository},
    service::{AuthService, MenuItemService, OrderService, RestaurantService},
};
use anyhow::{Context, Result};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub restaurant_service: DynRestaurantService,
    pub menu_item_service: DynMenuItemService,
    pub order_service: DynOrderService,
    pub cart_store: DynCartStore,
    pub guest_sessions: DynGuestSessionStore,
    pub dispatcher: Arc<NotificationDispatcher>,
    pub events: OrderEventBus,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"DynAuthService")
            .field("restaurant_service", &"DynRestaurantService")
            .field("menu_item_service", &"DynMenuItemService")
            .field("order_service", &"DynOrderService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub hash: DynHashing,
    pub jwt_config: DynJwtService,
    pub redis: RedisClient,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, config: &Config) -> Result<Self> {
        let DependenciesInjectDeps {
            pool,
            hash,
            jwt_config,
            redis,
        } = deps;

        let cache = CacheStore::new(redis.pool.clone());
        let cart_store = Arc::new(CartStore::new(cache.clone())) as DynCartStore;
        let guest_sessions = Arc::new(GuestSessionStore::new(cache)) as DynGuestSessionStore;

        let twilio = Arc::new(TwilioProvider::new(&config.sms)) as DynSmsProvider;
        let termii = Arc::new(TermiiProvider::new(&config.sms)) as DynSmsProvider;
        let (primary, fallback) = match config.sms.primary {
            SmsProviderKind::Twilio => (twilio, termii),
            SmsProviderKind::Termii => (termii, twilio),
        };
        let sms = Arc::new(SmsDispatcher::new(primary, fallback)) as DynSmsProvider;

        let email = Arc::new(
            EmailService::new(&config.email).context("Failed to create email service")?,
        ) as DynEmailService;

        let dispatcher = Arc::new(NotificationDispatcher::new(
            sms,
            email,
            config.email.admin_email.clone(),
            config.sms.admin_phone.clone(),
        ));

        let events = OrderEventBus::default();

        let user_repo = UserRepository::new(pool.clone());
        let restaurant_repo = RestaurantRepository::new(pool.clone());
        let menu_item_repo = MenuItemRepository::new(pool.clone());
        let order_repo = OrderRepository::new(pool);

        let auth_service = Arc::new(AuthService::new(
            user_repo.query.clone(),
            user_repo.command,
            hash,
            jwt_config,
        )) as DynAuthService;

        let restaurant_service = Arc::new(RestaurantService::new(
            restaurant_repo.query.clone(),
            restaurant_repo.command,
        )) as DynRestaurantService;

        let menu_item_service = Arc::new(MenuItemService::new(
            menu_item_repo.query,
            menu_item_repo.command,
            restaurant_repo.query,
        )) as DynMenuItemService;

        let order_service = Arc::new(OrderService::new(
            order_repo.query,
            order_repo.command,
            user_repo.query,
            cart_store.clone(),
            events.clone(),
            dispatcher.clone(),
        )) as DynOrderService;

        Ok(Self {
            auth_service,
            restaurant_service,
            menu_item_service,
            order_service,
            cart_store,
            guest_sessions,
            dispatcher,
            events,
        })
    }
}
