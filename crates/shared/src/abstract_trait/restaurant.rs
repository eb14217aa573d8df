use crate::{
    domain::{
        requests::{
            CreateRestaurantRequest, DeliveryEstimateQuery, FindAllRestaurants,
            UpdateRestaurantRequest,
        },
        responses::{
            ApiResponse, ApiResponsePagination, DeliveryEstimateResponse, RestaurantResponse,
        },
    },
    errors::{RepositoryError, ServiceError},
    model::{Branch, Restaurant},
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynRestaurantQueryRepository = Arc<dyn RestaurantQueryRepositoryTrait + Send + Sync>;
pub type DynRestaurantCommandRepository = Arc<dyn RestaurantCommandRepositoryTrait + Send + Sync>;
pub type DynRestaurantService = Arc<dyn RestaurantServiceTrait + Send + Sync>;

#[async_trait]
pub trait RestaurantQueryRepositoryTrait {
    async fn find_all(
        &self,
        req: &FindAllRestaurants,
    ) -> Result<(Vec<Restaurant>, i64), RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Restaurant, RepositoryError>;
    async fn find_branches(&self, restaurant_id: Uuid) -> Result<Vec<Branch>, RepositoryError>;
}

#[async_trait]
pub trait RestaurantCommandRepositoryTrait {
    async fn create(
        &self,
        vendor_id: Uuid,
        req: &CreateRestaurantRequest,
    ) -> Result<Restaurant, RepositoryError>;
    async fn update(
        &self,
        id: Uuid,
        req: &UpdateRestaurantRequest,
    ) -> Result<Restaurant, RepositoryError>;
}

#[async_trait]
pub trait RestaurantServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllRestaurants,
    ) -> Result<ApiResponsePagination<Vec<RestaurantResponse>>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<RestaurantResponse>, ServiceError>;
    async fn create(
        &self,
        vendor_id: Uuid,
        req: &CreateRestaurantRequest,
    ) -> Result<ApiResponse<RestaurantResponse>, ServiceError>;
    async fn update(
        &self,
        id: Uuid,
        vendor_id: Uuid,
        req: &UpdateRestaurantRequest,
    ) -> Result<ApiResponse<RestaurantResponse>, ServiceError>;
    async fn delivery_estimate(
        &self,
        id: Uuid,
        req: &DeliveryEstimateQuery,
    ) -> Result<ApiResponse<DeliveryEstimateResponse>, ServiceError>;
}
