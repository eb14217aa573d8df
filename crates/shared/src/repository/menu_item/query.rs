use crate::{
    abstract_trait::MenuItemQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{MenuItem, MenuItemKind},
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct MenuItemQueryRepository {
    db: ConnectionPool,
}

impl MenuItemQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MenuItemQueryRepositoryTrait for MenuItemQueryRepository {
    async fn find_for_restaurant(
        &self,
        restaurant_id: Uuid,
        approved_only: bool,
    ) -> Result<Vec<MenuItem>, RepositoryError> {
        info!("🔍 Fetching menu for restaurant {restaurant_id}");

        sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT *
            FROM menu_items
            WHERE restaurant_id = $1 AND ($2 = FALSE OR approved = TRUE)
            ORDER BY name
            "#,
        )
        .bind(restaurant_id)
        .bind(approved_only)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch menu items: {:?}", e);
            RepositoryError::from(e)
        })
    }

    async fn find_by_kind(&self, kind: MenuItemKind) -> Result<Vec<MenuItem>, RepositoryError> {
        sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT *
            FROM menu_items
            WHERE kind = $1 AND approved = TRUE
            ORDER BY name
            "#,
        )
        .bind(kind)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch {:?} items: {:?}", kind, e);
            RepositoryError::from(e)
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<MenuItem, RepositoryError> {
        let item =
            sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items WHERE menu_item_id = $1")
                .bind(id)
                .fetch_optional(&self.db)
                .await
                .map_err(|e| {
                    error!("❌ Failed to fetch menu item {id}: {:?}", e);
                    RepositoryError::from(e)
                })?;

        item.ok_or(RepositoryError::NotFound)
    }
}
