use crate::{
    abstract_trait::MenuItemCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateMenuItemRequest, UpdateMenuItemRequest},
    errors::RepositoryError,
    model::MenuItem,
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct MenuItemCommandRepository {
    db: ConnectionPool,
}

impl MenuItemCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MenuItemCommandRepositoryTrait for MenuItemCommandRepository {
    async fn create(&self, req: &CreateMenuItemRequest) -> Result<MenuItem, RepositoryError> {
        info!("🍔 Creating menu item '{}'", req.name);

        // new items always land unapproved
        sqlx::query_as::<_, MenuItem>(
            r#"
            INSERT INTO menu_items (
                menu_item_id, restaurant_id, name, price, description,
                image_url, approved, kind, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, FALSE, $7, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(req.restaurant_id)
        .bind(&req.name)
        .bind(req.price)
        .bind(req.description.as_deref())
        .bind(req.image_url.as_deref())
        .bind(req.kind)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to create menu item: {:?}", e);
            RepositoryError::from(e)
        })
    }

    async fn update(
        &self,
        id: Uuid,
        req: &UpdateMenuItemRequest,
    ) -> Result<MenuItem, RepositoryError> {
        info!("🍔 Updating menu item {id}");

        let item = sqlx::query_as::<_, MenuItem>(
            r#"
            UPDATE menu_items
            SET name = COALESCE($2, name),
                price = COALESCE($3, price),
                description = COALESCE($4, description),
                image_url = COALESCE($5, image_url),
                kind = COALESCE($6, kind),
                updated_at = NOW()
            WHERE menu_item_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(req.name.as_deref())
        .bind(req.price)
        .bind(req.description.as_deref())
        .bind(req.image_url.as_deref())
        .bind(req.kind)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update menu item {id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        item.ok_or(RepositoryError::NotFound)
    }

    async fn approve(&self, id: Uuid) -> Result<MenuItem, RepositoryError> {
        info!("✅ Approving menu item {id}");

        let item = sqlx::query_as::<_, MenuItem>(
            r#"
            UPDATE menu_items
            SET approved = TRUE, updated_at = NOW()
            WHERE menu_item_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to approve menu item {id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        item.ok_or(RepositoryError::NotFound)
    }
}
