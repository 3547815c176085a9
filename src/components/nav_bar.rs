use yew::prelude::*;
use yew_router::prelude::*;
use crate::routes::Route;

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("Instagram", "https://instagram.com"),
    ("Facebook", "https://facebook.com"),
    ("Twitter", "https://twitter.com"),
];

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    html! {
        <nav class="nav-bar">
            <div class="nav-links">
                <Link<Route> classes={classes!("nav-link")} to={Route::Home}>{"Home"}</Link<Route>>
                <Link<Route> classes={classes!("nav-link")} to={Route::Recipes}>{"Recetas"}</Link<Route>>
            </div>
            <div class="nav-social">
                { for SOCIAL_LINKS.iter().map(|(name, url)| html! {
                    <a class="social-link" href={*url} target="_blank" rel="noopener noreferrer">{*name}</a>
                }) }
            </div>
        </nav>
    }
}
