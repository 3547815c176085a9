use yew::prelude::*;
use yew_router::prelude::*;
use crate::components::RecipeEditor;
use crate::error::ApiError;
use crate::hooks::{use_auth_context, use_countries};
use crate::routes::Route;
use crate::services::create_recipe;
use crate::utils::MSG_CREATE_RECIPE_FAILED;
use crate::validation::{build_recipe_payload, validate_recipe_form, RecipeForm as RecipeFormState, MSG_LOGIN_TO_CREATE};

/// Alta de receta: valida, envía y abre la receta creada
#[function_component(RecipeForm)]
pub fn recipe_form() -> Html {
    let Some(auth) = use_auth_context() else {
        return html! {};
    };
    let countries = use_countries();
    let navigator = use_navigator();
    let form = use_state(RecipeFormState::blank);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_change = {
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |next: RecipeFormState| {
            form.set(next);
            error.set(None);
        })
    };

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let token = auth.state.token.clone();
        let expire = auth.expire.clone();
        Callback::from(move |_: ()| {
            if let Err(message) = validate_recipe_form(&form) {
                error.set(Some(message.to_string()));
                return;
            }
            let Some(token) = token.clone() else {
                error.set(Some(MSG_LOGIN_TO_CREATE.to_string()));
                return;
            };

            let payload = build_recipe_payload(&form);
            let error = error.clone();
            let submitting = submitting.clone();
            let navigator = navigator.clone();
            let expire = expire.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match create_recipe(&payload, Some(&token)).await {
                    Ok(recipe) => {
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::RecipeDetail { id: recipe.id });
                        }
                    }
                    Err(ApiError::Http { status: 401, .. }) => expire.emit(()),
                    Err(e) => {
                        log::error!("❌ Error creando receta: {}", e);
                        error.set(Some(format!("❌ {}", e.user_message(MSG_CREATE_RECIPE_FAILED))));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="recipe-form">
            <h1>{"🍳 Nueva receta"}</h1>
            <RecipeEditor
                form={(*form).clone()}
                countries={(*countries).clone()}
                {on_change}
                {on_submit}
                submit_label="Registrar receta"
                submitting={*submitting}
                error={(*error).clone()}
            />
        </div>
    }
}
