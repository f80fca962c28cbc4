//! # Catalog Core - Domain Module
//! 
//! Domain entities for agent categories and their items.

pub mod application;
pub mod category;
pub mod category_item;
pub mod position;
pub mod view;

// Re-export all entities and enums
pub use application::Application;
pub use category::Category;
pub use category_item::{CategoryItem, ItemContent, ItemIcon, ItemType};
pub use position::resolve_position;
pub use view::{CategoryView, RenderedItem};
