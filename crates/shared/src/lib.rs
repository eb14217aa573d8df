pub mod abstract_trait;
pub mod cache;
pub mod config;
pub mod di;
pub mod domain;
pub mod errors;
pub mod events;
pub mod model;
pub mod notification;
pub mod repository;
pub mod service;
pub mod utils;
