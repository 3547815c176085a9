pub mod api_client;
pub mod auth_service;
pub mod recipe_service;
pub mod comment_service;

pub use api_client::ApiClient;
pub use auth_service::*;
pub use recipe_service::*;
pub use comment_service::*;
