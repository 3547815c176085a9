// ============================================================================
// EDITAR RECETA - carga, limpia, guarda (PUT) y elimina
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;
use crate::components::RecipeEditor;
use crate::error::ApiError;
use crate::hooks::{use_auth_context, use_countries, use_recipe_detail};
use crate::routes::Route;
use crate::services::{delete_recipe, update_recipe};
use crate::utils::{alert, confirm, MSG_DELETE_RECIPE_FAILED, MSG_UPDATE_RECIPE_FAILED};
use crate::validation::{build_recipe_payload, validate_recipe_form, RecipeForm};

#[derive(Properties, PartialEq)]
pub struct EditRecipeProps {
    pub id: String,
}

#[function_component(EditRecipe)]
pub fn edit_recipe(props: &EditRecipeProps) -> Html {
    let Some(auth) = use_auth_context() else {
        return html! {};
    };
    let detail = use_recipe_detail(props.id.clone());
    let countries = use_countries();
    let navigator = use_navigator();
    let form = use_state(|| None::<RecipeForm>);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    // Formulario a partir de la receta ya limpia
    {
        let form = form.clone();
        let recipe = detail.state.recipe.clone();
        let countries = (*countries).clone();
        use_effect_with(recipe, move |recipe| {
            if let Some(recipe) = recipe {
                form.set(Some(RecipeForm::from_payload(&recipe.to_payload(&countries))));
            }
            || ()
        });
    }

    // Recetas antiguas sin paisId: se resuelve por nombre cuando llegan los países
    {
        let form = form.clone();
        let recipe = detail.state.recipe.clone();
        use_effect_with((*countries).clone(), move |countries| {
            if let (Some(current), Some(recipe)) = ((*form).clone(), recipe) {
                if current.pais_id.is_empty() {
                    if let Some(pais_id) = recipe.resolved_country_id(countries) {
                        form.set(Some(RecipeForm { pais_id, ..current }));
                    }
                }
            }
            || ()
        });
    }

    let on_change = {
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |next: RecipeForm| {
            form.set(Some(next));
            error.set(None);
        })
    };

    let on_save = {
        let form = form.clone();
        let error = error.clone();
        let saving = saving.clone();
        let id = props.id.clone();
        let token = auth.state.token.clone();
        let expire = auth.expire.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: ()| {
            let Some(current) = (*form).clone() else { return };
            if let Err(message) = validate_recipe_form(&current) {
                error.set(Some(message.to_string()));
                return;
            }

            let payload = build_recipe_payload(&current);
            let error = error.clone();
            let saving = saving.clone();
            let id = id.clone();
            let token = token.clone();
            let expire = expire.clone();
            let navigator = navigator.clone();
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match update_recipe(&id, &payload, token.as_deref()).await {
                    Ok(()) => {
                        alert("Receta editada correctamente.");
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::RecipeDetail { id });
                        }
                    }
                    Err(ApiError::Http { status: 401, .. }) => expire.emit(()),
                    Err(e) => {
                        log::error!("❌ Error guardando receta {}: {}", id, e);
                        error.set(Some(e.user_message(MSG_UPDATE_RECIPE_FAILED)));
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_delete = {
        let error = error.clone();
        let id = props.id.clone();
        let token = auth.state.token.clone();
        let expire = auth.expire.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if !confirm("¿Seguro que quieres eliminar esta receta?") {
                return;
            }
            let error = error.clone();
            let id = id.clone();
            let token = token.clone();
            let expire = expire.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match delete_recipe(&id, token.as_deref()).await {
                    Ok(()) => {
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Recipes);
                        }
                    }
                    Err(ApiError::Unauthenticated) | Err(ApiError::Http { status: 401, .. }) => expire.emit(()),
                    Err(e) => {
                        log::error!("❌ Error eliminando receta {}: {}", id, e);
                        error.set(Some(e.user_message(MSG_DELETE_RECIPE_FAILED)));
                    }
                }
            });
        })
    };

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.back();
            }
        })
    };

    let state = &*detail.state;
    if state.loading && form.is_none() {
        return html! { <div class="loading-text">{"Cargando receta..."}</div> };
    }
    if let Some(load_error) = &state.error {
        return html! { <div class="error-message">{load_error.clone()}</div> };
    }
    let Some(current) = (*form).clone() else {
        return html! {};
    };

    html! {
        <div class="page edit-recipe">
            <h1>{"✏️ Editar receta"}</h1>
            <RecipeEditor
                form={current}
                countries={(*countries).clone()}
                {on_change}
                on_submit={on_save}
                submit_label="Guardar cambios"
                submitting={*saving}
                error={(*error).clone()}
            >
                <button type="button" class="btn-secondary" onclick={on_back}>{"Volver"}</button>
                <button type="button" class="btn-danger" onclick={on_delete}>{"🗑️ Eliminar"}</button>
            </RecipeEditor>
        </div>
    }
}
