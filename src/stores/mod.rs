pub mod auth_store;
pub mod favorites_store;
pub mod theme_store;
pub mod catalog_store;

pub use auth_store::AuthStore;
pub use favorites_store::FavoritesStore;
pub use theme_store::Theme;
pub use catalog_store::{CatalogAction, CatalogStore};
