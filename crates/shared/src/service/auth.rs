use crate::{
    abstract_trait::{
        AuthServiceTrait, DynHashing, DynJwtService, DynUserCommandRepository,
        DynUserQueryRepository,
    },
    domain::{
        requests::{LoginRequest, RegisterRequest, UpdateProfileRequest},
        responses::{ApiResponse, TokenResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct AuthService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    hashing: DynHashing,
    jwt: DynJwtService,
}

impl AuthService {
    pub fn new(
        query: DynUserQueryRepository,
        command: DynUserCommandRepository,
        hashing: DynHashing,
        jwt: DynJwtService,
    ) -> Self {
        Self {
            query,
            command,
            hashing,
            jwt,
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        info!("👤 Registering user with email {}", req.email);

        if self.query.find_by_email(&req.email).await?.is_some() {
            error!("❌ Email {} is already registered", req.email);
            return Err(ServiceError::Repo(RepositoryError::AlreadyExists(
                "Email is already registered".into(),
            )));
        }

        let hashed = self.hashing.hash_password(&req.password).await?;
        let user = self.command.create_user(req, &hashed).await?;

        info!("✅ User {} registered", user.user_id);
        Ok(ApiResponse::success(
            "User registered successfully",
            user.into(),
        ))
    }

    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        info!("🔍 Login attempt for {}", req.email);

        let user = self
            .query
            .find_by_email(&req.email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        self.hashing
            .compare_password(&user.password, &req.password)
            .await
            .map_err(|_| ServiceError::InvalidCredentials)?;

        let access_token = self.jwt.generate_token(user.user_id, user.role, "access")?;

        info!("✅ User {} logged in", user.user_id);
        Ok(ApiResponse::success(
            "Login successful",
            TokenResponse {
                access_token,
                token_type: "Bearer".into(),
            },
        ))
    }

    async fn me(&self, user_id: Uuid) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let user = self.query.find_by_id(user_id).await?;
        Ok(ApiResponse::success("User profile", user.into()))
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        req: &UpdateProfileRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let user = self.command.update_profile(user_id, req).await?;
        info!("✅ Profile updated for user {user_id}");
        Ok(ApiResponse::success("Profile updated", user.into()))
    }
}
