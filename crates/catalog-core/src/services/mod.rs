//! Domain services (business logic)

pub mod category_service;
pub mod item_service;
pub mod render;

pub use category_service::{CategoryService, CategoryInput};
pub use item_service::{ItemService, NewItemInput};
pub use render::ItemRenderer;
