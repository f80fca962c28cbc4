//! # Catalog Infrastructure
//! 
//! Database and in-memory implementations of the catalog ports (adapters).

pub mod database;
pub mod memory;

pub use database::{
    create_pool, run_migrations, PgApplicationRegistry, PgCategoryItemRepository, PgCategoryRepository,
};
pub use memory::InMemoryCatalog;
