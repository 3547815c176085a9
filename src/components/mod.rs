pub mod app;
pub mod hero;
pub mod nav_bar;
pub mod section_intro;
pub mod country_filter;
pub mod footer;
pub mod not_found;
pub mod star_rating;
pub mod recipe_card;
pub mod all_recipes;
pub mod comment_list;
pub mod recipe_detail;
pub mod recipe_editor;
pub mod recipe_form;
pub mod edit_recipe;
pub mod login;
pub mod register;
pub mod auth_modal;

pub use app::App;
pub use hero::Hero;
pub use nav_bar::NavBar;
pub use section_intro::SectionIntro;
pub use country_filter::CountryFilter;
pub use footer::Footer;
pub use not_found::NotFound;
pub use star_rating::StarRating;
pub use recipe_card::RecipeCard;
pub use all_recipes::AllRecipes;
pub use comment_list::CommentList;
pub use recipe_detail::RecipeDetail;
pub use recipe_editor::RecipeEditor;
pub use recipe_form::RecipeForm;
pub use edit_recipe::EditRecipe;
pub use login::Login;
pub use register::Register;
pub use auth_modal::AuthModalView;
