mod command;
mod query;

pub use self::command::MenuItemCommandRepository;
pub use self::query::MenuItemQueryRepository;

use crate::{
    abstract_trait::{DynMenuItemCommandRepository, DynMenuItemQueryRepository},
    config::ConnectionPool,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct MenuItemRepository {
    pub query: DynMenuItemQueryRepository,
    pub command: DynMenuItemCommandRepository,
}

impl MenuItemRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self {
            query: Arc::new(MenuItemQueryRepository::new(db.clone())),
            command: Arc::new(MenuItemCommandRepository::new(db)),
        }
    }
}
