mod command;
mod query;

pub use self::command::OrderCommandRepository;
pub use self::query::OrderQueryRepository;

use crate::{
    abstract_trait::{DynOrderCommandRepository, DynOrderQueryRepository},
    config::ConnectionPool,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct OrderRepository {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
}

impl OrderRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self {
            query: Arc::new(OrderQueryRepository::new(db.clone())),
            command: Arc::new(OrderCommandRepository::new(db)),
        }
    }
}
