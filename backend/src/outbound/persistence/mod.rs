//! Persistence adapters implementing the domain's driven ports.

pub mod diesel_catalogue_reader;
pub mod diesel_user_repository;
pub mod memory;
pub mod models;
pub mod password_auth_service;
pub mod pool;
pub mod schema;

pub use diesel_catalogue_reader::DieselCatalogueReader;
pub use diesel_user_repository::DieselUserRepository;
pub use memory::{InMemoryCatalogue, InMemoryUserRepository};
pub use password_auth_service::PasswordAuthService;
pub use pool::{DbPool, PoolConfig, PoolError};
