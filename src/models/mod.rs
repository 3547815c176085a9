pub mod wire;
pub mod recipe;
pub mod comment;
pub mod auth;

pub use recipe::{Recipe, Ingredient, Step, Country, CountryRef, RecipePayload, BackendMessage};
pub use comment::{Comment, CommentAuthor, NewComment, CommentUpdate, MAX_RATING};
pub use auth::{LoginRequest, LoginResponse, RegisterRequest, Session};
