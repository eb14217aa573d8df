use crate::{
    abstract_trait::UserCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{RegisterRequest, UpdateProfileRequest},
    errors::RepositoryError,
    model::{User, UserRole},
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(
        &self,
        req: &RegisterRequest,
        hashed_password: &str,
    ) -> Result<User, RepositoryError> {
        info!("👤 Creating user {}", req.email);

        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (
                user_id, name, email, phone, verified, role, password, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, FALSE, $5, $6, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .bind(&req.email)
        .bind(req.phone.as_deref())
        .bind(UserRole::User)
        .bind(hashed_password)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return RepositoryError::AlreadyExists(format!(
                    "User with email {} already exists",
                    req.email
                ));
            }
            error!("❌ Failed to create user: {:?}", e);
            RepositoryError::from(e)
        })
    }

    async fn update_profile(
        &self,
        id: Uuid,
        req: &UpdateProfileRequest,
    ) -> Result<User, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                phone = COALESCE($3, phone),
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(req.name.as_deref())
        .bind(req.phone.as_deref())
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update profile for {id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        user.ok_or(RepositoryError::NotFound)
    }
}
