use crate::{
    abstract_trait::{
        DynMenuItemCommandRepository, DynMenuItemQueryRepository, DynRestaurantQueryRepository,
        MenuItemServiceTrait,
    },
    domain::{
        requests::{CreateMenuItemRequest, UpdateMenuItemRequest},
        responses::{ApiResponse, MenuItemResponse},
    },
    errors::ServiceError,
    model::MenuItemKind,
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct MenuItemService {
    query: DynMenuItemQueryRepository,
    command: DynMenuItemCommandRepository,
    restaurant_query: DynRestaurantQueryRepository,
}

impl MenuItemService {
    pub fn new(
        query: DynMenuItemQueryRepository,
        command: DynMenuItemCommandRepository,
        restaurant_query: DynRestaurantQueryRepository,
    ) -> Self {
        Self {
            query,
            command,
            restaurant_query,
        }
    }

    async fn ensure_owner(&self, restaurant_id: Uuid, vendor_id: Uuid) -> Result<(), ServiceError> {
        let restaurant = self.restaurant_query.find_by_id(restaurant_id).await?;
        if restaurant.vendor_id != vendor_id {
            error!("❌ Vendor {vendor_id} does not own restaurant {restaurant_id}");
            return Err(ServiceError::Forbidden(
                "You do not own this restaurant".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl MenuItemServiceTrait for MenuItemService {
    async fn menu_for_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> Result<ApiResponse<Vec<MenuItemResponse>>, ServiceError> {
        info!("🍔 Fetching menu for restaurant {restaurant_id}");

        // customers only ever see approved items
        let items = self.query.find_for_restaurant(restaurant_id, true).await?;
        let data = items.into_iter().map(Into::into).collect();

        Ok(ApiResponse::success("Menu retrieved", data))
    }

    async fn featured(&self) -> Result<ApiResponse<Vec<MenuItemResponse>>, ServiceError> {
        let items = self.query.find_by_kind(MenuItemKind::Featured).await?;
        Ok(ApiResponse::success(
            "Featured items retrieved",
            items.into_iter().map(Into::into).collect(),
        ))
    }

    async fn popular(&self) -> Result<ApiResponse<Vec<MenuItemResponse>>, ServiceError> {
        let items = self.query.find_by_kind(MenuItemKind::Popular).await?;
        Ok(ApiResponse::success(
            "Popular items retrieved",
            items.into_iter().map(Into::into).collect(),
        ))
    }

    async fn create(
        &self,
        vendor_id: Uuid,
        req: &CreateMenuItemRequest,
    ) -> Result<ApiResponse<MenuItemResponse>, ServiceError> {
        self.ensure_owner(req.restaurant_id, vendor_id).await?;

        let item = self.command.create(req).await?;

        info!("✅ Menu item {} created, awaiting approval", item.menu_item_id);
        Ok(ApiResponse::success("Menu item created", item.into()))
    }

    async fn update(
        &self,
        id: Uuid,
        vendor_id: Uuid,
        req: &UpdateMenuItemRequest,
    ) -> Result<ApiResponse<MenuItemResponse>, ServiceError> {
        let existing = self.query.find_by_id(id).await?;
        self.ensure_owner(existing.restaurant_id, vendor_id).await?;

        let item = self.command.update(id, req).await?;
        Ok(ApiResponse::success("Menu item updated", item.into()))
    }

    async fn approve(&self, id: Uuid) -> Result<ApiResponse<MenuItemResponse>, ServiceError> {
        let item = self.command.approve(id).await?;
        info!("✅ Menu item {id} approved");
        Ok(ApiResponse::success("Menu item approved", item.into()))
    }
}
