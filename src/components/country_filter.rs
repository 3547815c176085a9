use yew::prelude::*;
use yew_router::prelude::*;
use crate::routes::{CountryQuery, Route};
use crate::utils::DEFAULT_COUNTRIES;

/// Botones de país de la portada: abren el catálogo filtrado
#[function_component(CountryFilter)]
pub fn country_filter() -> Html {
    let navigator = use_navigator();

    let go_to_country = {
        let navigator = navigator.clone();
        Callback::from(move |pais: String| {
            let Some(navigator) = &navigator else { return };
            if let Err(e) = navigator.push_with_query(&Route::Recipes, &CountryQuery::new(&pais)) {
                log::error!("❌ No se pudo abrir el catálogo de {}: {:?}", pais, e);
            }
        })
    };

    let on_explore = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Recipes);
            }
        })
    };

    html! {
        <div class="country-filter">
            <h2>{"Explora Sabores por País"}</h2>
            <div class="country-map">
                <p class="country-filter-title">{"Filtrar Recetas por País"}</p>
                <div class="country-buttons">
                    { for DEFAULT_COUNTRIES.iter().map(|(_, nombre)| {
                        let pais = nombre.to_string();
                        let go_to_country = go_to_country.clone();
                        html! {
                            <button class="btn-country" onclick={Callback::from(move |_: MouseEvent| go_to_country.emit(pais.clone()))}>
                                {*nombre}
                            </button>
                        }
                    }) }
                </div>
            </div>
            <div class="country-explore">
                <button class="btn-explore" onclick={on_explore}>{"¡Empieza a Explorar!"}</button>
            </div>
        </div>
    }
}
