//! Repository traits (ports)

pub mod category_repository;
pub mod category_item_repository;
pub mod application_registry;

pub use category_repository::CategoryRepository;
pub use category_item_repository::CategoryItemRepository;
pub use application_registry::ApplicationRegistry;

#[cfg(test)]
pub use application_registry::MockApplicationRegistry;
#[cfg(test)]
pub use category_item_repository::MockCategoryItemRepository;
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
