mod command;
mod query;

pub use self::command::RestaurantCommandRepository;
pub use self::query::RestaurantQueryRepository;

use crate::{
    abstract_trait::{DynRestaurantCommandRepository, DynRestaurantQueryRepository},
    config::ConnectionPool,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct RestaurantRepository {
    pub query: DynRestaurantQueryRepository,
    pub command: DynRestaurantCommandRepository,
}

impl RestaurantRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self {
            query: Arc::new(RestaurantQueryRepository::new(db.clone())),
            command: Arc::new(RestaurantCommandRepository::new(db)),
        }
    }
}
