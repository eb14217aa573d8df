use crate::{
    domain::{
        requests::{LoginRequest, RegisterRequest, UpdateProfileRequest},
        responses::{ApiResponse, TokenResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::User,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;
pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;
pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryRepositoryTrait {
    async fn find_by_id(&self, id: Uuid) -> Result<User, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
}

#[async_trait]
pub trait UserCommandRepositoryTrait {
    async fn create_user(
        &self,
        req: &RegisterRequest,
        hashed_password: &str,
    ) -> Result<User, RepositoryError>;
    async fn update_profile(
        &self,
        id: Uuid,
        req: &UpdateProfileRequest,
    ) -> Result<User, RepositoryError>;
}

#[async_trait]
pub trait AuthServiceTrait {
    async fn register(&self, req: &RegisterRequest)
    -> Result<ApiResponse<UserResponse>, ServiceError>;
    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError>;
    async fn me(&self, user_id: Uuid) -> Result<ApiResponse<UserResponse>, ServiceError>;
    async fn update_profile(
        &self,
        user_id: Uuid,
        req: &UpdateProfileRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
}
