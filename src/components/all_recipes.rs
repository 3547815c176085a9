// ============================================================================
// CATÁLOGO DE RECETAS - vistas, filtro de país y favoritos
// ============================================================================

use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;
use crate::components::RecipeCard;
use crate::filters::RecipeView;
use crate::hooks::{use_auth_context, use_catalog, use_favorites};
use crate::routes::{CountryQuery, Route};

#[function_component(AllRecipes)]
pub fn all_recipes() -> Html {
    let Some(auth) = use_auth_context() else {
        return html! {};
    };
    let navigator = use_navigator();
    let initial_country = use_location()
        .and_then(|location| location.query::<CountryQuery>().ok())
        .and_then(|query| query.pais);

    let is_logged_in = auth.state.is_logged_in;
    let catalog = use_catalog(
        auth.state.token.clone(),
        auth.state.user_id.clone(),
        initial_country,
    );
    let favorites = use_favorites(is_logged_in);

    // "Mis recetas" deja de tener sentido al cerrar sesión
    {
        let set_view = catalog.set_view.clone();
        use_effect_with(is_logged_in, move |logged_in| {
            if !*logged_in {
                set_view.emit(RecipeView::All);
            }
            || ()
        });
    }

    let on_country_change = {
        let set_country = catalog.set_country.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set_country.emit(select.value());
        })
    };

    let on_open = {
        let navigator = navigator.clone();
        Callback::from(move |id: String| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::RecipeDetail { id });
            }
        })
    };

    let on_create = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::CreateRecipe);
            }
        })
    };

    let state = &*catalog.state;
    let mut views = vec![RecipeView::All];
    if is_logged_in {
        views.push(RecipeView::Mine);
    }
    views.push(RecipeView::Favorites);

    let view_buttons = views.into_iter().map(|view| {
        let set_view = catalog.set_view.clone();
        html! {
            <button
                class={classes!("btn-view", (state.view == view).then_some("active"))}
                onclick={Callback::from(move |_: MouseEvent| set_view.emit(view))}
            >
                {view.label()}
            </button>
        }
    });

    let body = if state.loading {
        html! { <div class="loading"><div class="spinner"></div></div> }
    } else if let Some(error) = &state.error {
        html! { <div class="error-message">{error.clone()}</div> }
    } else {
        let displayed = state.displayed(&favorites.favorites, &auth.state.owner());
        if displayed.is_empty() {
            html! { <p class="empty-message">{state.view.empty_message()}</p> }
        } else {
            html! {
                <section class="recipe-grid">
                    { for displayed.into_iter().map(|recipe| {
                        let is_favorite = favorites.favorites.contains(&recipe.id);
                        let key = recipe.id.clone();
                        html! {
                            <RecipeCard
                                key={key}
                                {recipe}
                                {is_favorite}
                                on_open={on_open.clone()}
                                on_toggle_favorite={favorites.toggle.clone()}
                            />
                        }
                    }) }
                </section>
            }
        }
    };

    html! {
        <div class="all-recipes">
            <div class="all-recipes-header">
                <div>
                    <h1>{"Recetas del Mundo"}</h1>
                    <p class="subtitle">{"Sabor, color y movimiento en cada receta."}</p>
                </div>
                <div class="all-recipes-controls">
                    <div class="view-buttons">{ for view_buttons }</div>
                    <select class="country-select" onchange={on_country_change}>
                        { for state.country_options().into_iter().map(|country| {
                            let selected = country == state.selected_country;
                            html! { <option value={country.clone()} {selected}>{country}</option> }
                        }) }
                    </select>
                    if is_logged_in {
                        <button class="btn-create" onclick={on_create}>{"+ Crear"}</button>
                    }
                </div>
            </div>
            {body}
        </div>
    }
}
