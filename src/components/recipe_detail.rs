use yew::prelude::*;
use yew_router::prelude::*;
use crate::components::{CommentList, StarRating};
use crate::hooks::{use_auth_context, use_recipe_detail};
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct RecipeDetailProps {
    pub id: String,
}

#[function_component(RecipeDetail)]
pub fn recipe_detail(props: &RecipeDetailProps) -> Html {
    let Some(auth) = use_auth_context() else {
        return html! {};
    };
    let detail = use_recipe_detail(props.id.clone());
    let navigator = use_navigator();
    let state = &*detail.state;

    if state.loading && state.recipe.is_none() {
        return html! { <div class="loading-text">{"Cargando receta..."}</div> };
    }
    if let Some(error) = &state.error {
        return html! { <div class="error-message">{error.clone()}</div> };
    }
    let Some(recipe) = state.recipe.clone() else {
        return html! {};
    };

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.back();
            }
        })
    };

    let rating = recipe.valoracion.map(|v| v.round().clamp(0.0, 5.0) as u8).unwrap_or(0);

    html! {
        <div class="recipe-detail">
            <div class="recipe-detail-toolbar">
                <button class="btn-back" onclick={on_back}>{"← Volver"}</button>
                if auth.state.can_edit(&recipe) {
                    <Link<Route> classes={classes!("btn-edit")} to={Route::EditRecipe { id: recipe.id.clone() }}>
                        {"✏️ Editar receta"}
                    </Link<Route>>
                }
            </div>

            if recipe.has_photo() {
                <img class="recipe-detail-photo" src={recipe.foto_url.clone().unwrap_or_default()} alt={recipe.titulo.clone()} />
            }
            <h1>{recipe.titulo.clone()}</h1>
            <p class="recipe-detail-description">{recipe.descripcion.clone()}</p>
            <div class="recipe-detail-meta">
                <span>{format!("🌍 {}", recipe.country_name())}</span>
                <span>{format!("⏱️ {}", recipe.duration_label())}</span>
                if let Some(dificultad) = recipe.dificultad.clone() {
                    <span>{format!("📊 {}", dificultad)}</span>
                }
                if let Some(autor) = recipe.autor_nombre.clone() {
                    <span>{format!("👩‍🍳 {}", autor)}</span>
                }
                <span class="recipe-detail-rating">
                    <StarRating value={rating} />
                    {recipe.rating_label()}
                </span>
            </div>

            <section class="ingredients">
                <h2>{"🧂 Ingredientes"}</h2>
                <ul>
                    { for recipe.ingredientes.iter().map(|i| html! {
                        <li>
                            <strong>{i.nombre.clone()}</strong>
                            {format!(" {} {}", i.cantidad, i.unidad)}
                            if !i.descripcion.is_empty() {
                                <span class="ingredient-note">{format!(" ({})", i.descripcion)}</span>
                            }
                        </li>
                    }) }
                </ul>
            </section>

            <section class="steps">
                <h2>{"👨‍🍳 Preparación"}</h2>
                <ol>
                    { for recipe.pasos.iter().map(|p| html! {
                        <li key={p.orden.to_string()}>
                            <span class="step-number">{p.orden}</span>
                            <p>{p.descripcion.clone()}</p>
                            if !p.foto_url.is_empty() {
                                <img class="step-photo" src={p.foto_url.clone()} alt={format!("Paso {}", p.orden)} />
                            }
                        </li>
                    }) }
                </ol>
            </section>

            <CommentList
                recipe_id={recipe.id.clone()}
                comments={recipe.comentarios.clone()}
                on_changed={detail.reload.clone()}
            />
        </div>
    }
}
