use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{
    AllRecipes, CountryFilter, EditRecipe, NotFound, RecipeDetail, RecipeForm, SectionIntro,
};
use crate::hooks::use_auth_context;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/recetas")]
    Recipes,
    #[at("/receta/:id")]
    RecipeDetail { id: String },
    #[at("/recetas/:id/editar")]
    EditRecipe { id: String },
    #[at("/crear-receta")]
    CreateRecipe,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// `?pais=` del catálogo, usado por los botones de país de la portada
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CountryQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pais: Option<String>,
}

impl CountryQuery {
    pub fn new(pais: &str) -> Self {
        Self {
            pais: Some(pais.to_string()),
        }
    }
}

impl Route {
    /// Rutas que exigen sesión iniciada
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::EditRecipe { .. } | Route::CreateRecipe)
    }
}

pub fn switch(route: Route) -> Html {
    log::debug!("🧭 {:?}", route);
    let protected = route.is_protected();
    let page = match route {
        Route::Home => html! {
            <main>
                <section class="section-intro-wrapper"><SectionIntro /></section>
                <section class="country-filter-wrapper"><CountryFilter /></section>
            </main>
        },
        Route::Recipes => html! { <div class="page"><AllRecipes /></div> },
        Route::RecipeDetail { id } => html! { <RecipeDetail {id} /> },
        Route::EditRecipe { id } => html! { <EditRecipe {id} /> },
        Route::CreateRecipe => html! { <div class="page"><RecipeForm /></div> },
        Route::NotFound => html! { <NotFound /> },
    };

    if protected {
        html! { <ProtectedRoute>{page}</ProtectedRoute> }
    } else {
        page
    }
}

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub children: Children,
}

/// Sin sesión abre el login y vuelve a la portada
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let Some(auth) = use_auth_context() else {
        return html! {};
    };
    let is_logged_in = auth.state.is_logged_in;

    {
        let open_login = auth.open_login.clone();
        use_effect_with(is_logged_in, move |logged_in| {
            if !*logged_in {
                log::info!("🔒 Ruta protegida sin sesión");
                open_login.emit(());
            }
            || ()
        });
    }

    if is_logged_in {
        html! { <>{props.children.clone()}</> }
    } else {
        html! { <Redirect<Route> to={Route::Home} /> }
    }
}
