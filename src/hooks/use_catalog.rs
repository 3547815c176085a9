// ============================================================================
// USE CATALOG - descarga de recetas según la vista activa
// ============================================================================
// Solo la vista dispara peticiones; el país se filtra en memoria.
// ============================================================================

use yew::prelude::*;
use crate::filters::RecipeView;
use crate::models::Recipe;
use crate::services::{fetch_recipes, fetch_user_recipes};
use crate::stores::{CatalogAction, CatalogStore};
use crate::utils::{MSG_LOAD_RECIPES_FAILED, MSG_UNKNOWN_USER};

#[derive(Clone, PartialEq)]
pub struct UseCatalogHandle {
    pub state: UseReducerHandle<CatalogStore>,
    pub set_view: Callback<RecipeView>,
    pub set_country: Callback<String>,
    pub reload: Callback<()>,
}

#[hook]
pub fn use_catalog(
    token: Option<String>,
    user_id: Option<String>,
    initial_country: Option<String>,
) -> UseCatalogHandle {
    let state = use_reducer(|| CatalogStore::with_country(initial_country));
    let reload_count = use_state(|| 0u32);
    let request_seq = use_mut_ref(|| 0u32);

    {
        let state = state.clone();
        let deps = (state.view, token, user_id, *reload_count);
        use_effect_with(deps, move |(view, token, user_id, _)| {
            let view = *view;
            let token = token.clone();
            let user_id = user_id.clone();
            let request_id = {
                let mut seq = request_seq.borrow_mut();
                *seq = seq.wrapping_add(1);
                *seq
            };
            state.dispatch(CatalogAction::StartLoading(request_id));

            wasm_bindgen_futures::spawn_local(async move {
                match load_view(view, token, user_id).await {
                    Ok(recipes) => state.dispatch(CatalogAction::Loaded { request_id, recipes }),
                    Err(message) => state.dispatch(CatalogAction::Failed {
                        request_id,
                        message: message.to_string(),
                    }),
                }
            });
            || ()
        });
    }

    let set_view = {
        let state = state.clone();
        Callback::from(move |view: RecipeView| {
            if state.view != view {
                log::info!("🗂️ Vista: {}", view.label());
                state.dispatch(CatalogAction::SetView(view));
            }
        })
    };

    let set_country = {
        let state = state.clone();
        Callback::from(move |country: String| state.dispatch(CatalogAction::SetCountry(country)))
    };
    let reload = {
        let reload_count = reload_count.clone();
        Callback::from(move |_| reload_count.set(*reload_count + 1))
    };

    UseCatalogHandle {
        state,
        set_view,
        set_country,
        reload,
    }
}

async fn load_view(
    view: RecipeView,
    token: Option<String>,
    user_id: Option<String>,
) -> Result<Vec<Recipe>, &'static str> {
    let result = if view.needs_user_endpoint() {
        let Some(user_id) = user_id else {
            log::warn!("⚠️ Vista '{}' sin userId guardado", view.label());
            return Err(MSG_UNKNOWN_USER);
        };
        fetch_user_recipes(&user_id, token.as_deref()).await
    } else {
        fetch_recipes(token.as_deref()).await
    };

    result.map_err(|e| {
        log::error!("❌ Error cargando recetas: {}", e);
        MSG_LOAD_RECIPES_FAILED
    })
}
