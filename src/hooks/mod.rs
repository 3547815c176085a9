pub mod use_auth;
pub mod use_theme;
pub mod use_favorites;
pub mod use_catalog;
pub mod use_recipe_detail;

pub use use_auth::{use_auth, use_auth_context, AuthContextProvider, AuthModal, UseAuthHandle};
pub use use_theme::{use_theme, UseThemeHandle};
pub use use_favorites::{use_favorites, UseFavoritesHandle};
pub use use_catalog::{use_catalog, UseCatalogHandle};
pub use use_recipe_detail::{use_countries, use_recipe_detail, RecipeDetailState, UseRecipeDetailHandle};
