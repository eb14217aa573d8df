use crate::{
    domain::{
        requests::{CreateMenuItemRequest, UpdateMenuItemRequest},
        responses::{ApiResponse, MenuItemResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{MenuItem, MenuItemKind},
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynMenuItemQueryRepository = Arc<dyn MenuItemQueryRepositoryTrait + Send + Sync>;
pub type DynMenuItemCommandRepository = Arc<dyn MenuItemCommandRepositoryTrait + Send + Sync>;
pub type DynMenuItemService = Arc<dyn MenuItemServiceTrait + Send + Sync>;

#[async_trait]
pub trait MenuItemQueryRepositoryTrait {
    async fn find_for_restaurant(
        &self,
        restaurant_id: Uuid,
        approved_only: bool,
    ) -> Result<Vec<MenuItem>, RepositoryError>;
    async fn find_by_kind(&self, kind: MenuItemKind) -> Result<Vec<MenuItem>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<MenuItem, RepositoryError>;
}

#[async_trait]
pub trait MenuItemCommandRepositoryTrait {
    async fn create(&self, req: &CreateMenuItemRequest) -> Result<MenuItem, RepositoryError>;
    async fn update(
        &self,
        id: Uuid,
        req: &UpdateMenuItemRequest,
    ) -> Result<MenuItem, RepositoryError>;
    async fn approve(&self, id: Uuid) -> Result<MenuItem, RepositoryError>;
}

#[async_trait]
pub trait MenuItemServiceTrait {
    async fn menu_for_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> Result<ApiResponse<Vec<MenuItemResponse>>, ServiceError>;
    async fn featured(&self) -> Result<ApiResponse<Vec<MenuItemResponse>>, ServiceError>;
    async fn popular(&self) -> Result<ApiResponse<Vec<MenuItemResponse>>, ServiceError>;
    async fn create(
        &self,
        vendor_id: Uuid,
        req: &CreateMenuItemRequest,
    ) -> Result<ApiResponse<MenuItemResponse>, ServiceError>;
    async fn update(
        &self,
        id: Uuid,
        vendor_id: Uuid,
        req: &UpdateMenuItemRequest,
    ) -> Result<ApiResponse<MenuItemResponse>, ServiceError>;
    async fn approve(&self, id: Uuid) -> Result<ApiResponse<MenuItemResponse>, ServiceError>;
}
