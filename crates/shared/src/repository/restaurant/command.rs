use crate::{
    abstract_trait::RestaurantCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateRestaurantRequest, UpdateRestaurantRequest},
    errors::RepositoryError,
    model::Restaurant,
};
use async_trait::async_trait;
use sqlx::types::Json;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct RestaurantCommandRepository {
    db: ConnectionPool,
}

impl RestaurantCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RestaurantCommandRepositoryTrait for RestaurantCommandRepository {
    async fn create(
        &self,
        vendor_id: Uuid,
        req: &CreateRestaurantRequest,
    ) -> Result<Restaurant, RepositoryError> {
        info!("🏪 Creating restaurant '{}' for vendor {vendor_id}", req.name);

        sqlx::query_as::<_, Restaurant>(
            r#"
            INSERT INTO restaurants (
                restaurant_id, vendor_id, name, category, schedule,
                rating, delivery_time_minutes, logo_url, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, 0, $6, $7, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vendor_id)
        .bind(&req.name)
        .bind(&req.category)
        .bind(Json(req.schedule.clone()))
        .bind(req.delivery_time_minutes)
        .bind(req.logo_url.as_deref())
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to create restaurant: {:?}", e);
            RepositoryError::from(e)
        })
    }

    async fn update(
        &self,
        id: Uuid,
        req: &UpdateRestaurantRequest,
    ) -> Result<Restaurant, RepositoryError> {
        info!("🏪 Updating restaurant {id}");

        let restaurant = sqlx::query_as::<_, Restaurant>(
            r#"
            UPDATE restaurants
            SET name = COALESCE($2, name),
                category = COALESCE($3, category),
                schedule = COALESCE($4, schedule),
                delivery_time_minutes = COALESCE($5, delivery_time_minutes),
                logo_url = COALESCE($6, logo_url),
                updated_at = NOW()
            WHERE restaurant_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(req.name.as_deref())
        .bind(req.category.as_deref())
        .bind(req.schedule.clone().map(Json))
        .bind(req.delivery_time_minutes)
        .bind(req.logo_url.as_deref())
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update restaurant {id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        restaurant.ok_or(RepositoryError::NotFound)
    }
}
