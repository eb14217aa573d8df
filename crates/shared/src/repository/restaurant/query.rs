use crate::{
    abstract_trait::RestaurantQueryRepositoryTrait, config::ConnectionPool,
    domain::requests::FindAllRestaurants, errors::RepositoryError,
    model::{Branch, Restaurant},
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct RestaurantQueryRepository {
    db: ConnectionPool,
}

impl RestaurantQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RestaurantQueryRepositoryTrait for RestaurantQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllRestaurants,
    ) -> Result<(Vec<Restaurant>, i64), RepositoryError> {
        info!("🔍 Fetching restaurants with search: {:?}", req.search);

        let limit = req.page_size.max(1) as i64;
        let offset = ((req.page - 1).max(0) * req.page_size.max(1)) as i64;

        let search_pattern = if req.search.trim().is_empty() {
            None
        } else {
            Some(format!("%{}%", req.search.trim()))
        };

        let restaurants = sqlx::query_as::<_, Restaurant>(
            r#"
            SELECT *
            FROM restaurants
            WHERE ($1::TEXT IS NULL OR name ILIKE $1 OR category ILIKE $1)
            ORDER BY rating DESC, name
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(search_pattern.as_deref())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch restaurants: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM restaurants
            WHERE ($1::TEXT IS NULL OR name ILIKE $1 OR category ILIKE $1)
            "#,
        )
        .bind(search_pattern.as_deref())
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok((restaurants, total))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Restaurant, RepositoryError> {
        let restaurant =
            sqlx::query_as::<_, Restaurant>("SELECT * FROM restaurants WHERE restaurant_id = $1")
                .bind(id)
                .fetch_optional(&self.db)
                .await
                .map_err(|e| {
                    error!("❌ Failed to fetch restaurant {id}: {:?}", e);
                    RepositoryError::from(e)
                })?;

        restaurant.ok_or(RepositoryError::NotFound)
    }

    async fn find_branches(&self, restaurant_id: Uuid) -> Result<Vec<Branch>, RepositoryError> {
        sqlx::query_as::<_, Branch>(
            "SELECT * FROM branches WHERE restaurant_id = $1 ORDER BY label",
        )
        .bind(restaurant_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch branches for {restaurant_id}: {:?}", e);
            RepositoryError::from(e)
        })
    }
}
