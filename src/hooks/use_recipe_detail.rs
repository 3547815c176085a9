use yew::prelude::*;
use crate::models::{Country, Recipe};
use crate::services::{default_countries, fetch_countries, fetch_recipe};

#[derive(Clone, Debug, PartialEq)]
pub struct RecipeDetailState {
    pub recipe: Option<Recipe>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for RecipeDetailState {
    fn default() -> Self {
        Self {
            recipe: None,
            loading: true,
            error: None,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct UseRecipeDetailHandle {
    pub state: UseStateHandle<RecipeDetailState>,
    pub reload: Callback<()>,
}

/// Carga la receta `id` con ingredientes y pasos ya limpios
#[hook]
pub fn use_recipe_detail(id: String) -> UseRecipeDetailHandle {
    let state = use_state(RecipeDetailState::default);
    let reload_count = use_state(|| 0u32);

    {
        let state = state.clone();
        use_effect_with((id, *reload_count), move |(id, _)| {
            let id = id.clone();
            state.set(RecipeDetailState {
                loading: true,
                ..(*state).clone()
            });
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_recipe(&id).await {
                    Ok(recipe) => {
                        let recipe = recipe.cleaned();
                        log::info!(
                            "✅ Receta {}: {} ingredientes, {} pasos, {} comentarios",
                            recipe.id,
                            recipe.ingredientes.len(),
                            recipe.pasos.len(),
                            recipe.comentarios.len()
                        );
                        state.set(RecipeDetailState {
                            recipe: Some(recipe),
                            loading: false,
                            error: None,
                        });
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando receta {}: {}", id, e);
                        state.set(RecipeDetailState {
                            recipe: None,
                            loading: false,
                            error: Some(e.user_message(crate::utils::MSG_LOAD_RECIPE_FAILED)),
                        });
                    }
                }
            });
            || ()
        });
    }

    let reload = {
        let reload_count = reload_count.clone();
        Callback::from(move |_| reload_count.set(*reload_count + 1))
    };

    UseRecipeDetailHandle { state, reload }
}

/// Países para los selects de formulario
#[hook]
pub fn use_countries() -> UseStateHandle<Vec<Country>> {
    let countries = use_state(default_countries);
    {
        let countries = countries.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                countries.set(fetch_countries().await);
            });
            || ()
        });
    }
    countries
}
