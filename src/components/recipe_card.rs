use yew::prelude::*;
use crate::models::Recipe;

#[derive(Properties, PartialEq, Clone)]
pub struct RecipeCardProps {
    pub recipe: Recipe,
    pub is_favorite: bool,
    pub on_open: Callback<String>,
    pub on_toggle_favorite: Callback<String>,
}

#[function_component(RecipeCard)]
pub fn recipe_card(props: &RecipeCardProps) -> Html {
    let r = &props.recipe;

    let on_open = {
        let id = r.id.clone();
        let cb = props.on_open.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };

    let on_favorite = {
        let id = r.id.clone();
        let cb = props.on_toggle_favorite.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(id.clone());
        })
    };

    html! {
        <article class="recipe-card" data-id={r.id.clone()}>
            <div class="recipe-card-media" onclick={on_open}>
                if r.has_photo() {
                    <img src={r.foto_url.clone().unwrap_or_default()} alt={r.titulo.clone()} />
                } else {
                    <div class="recipe-card-placeholder">{"🍽️"}</div>
                }
            </div>
            <div class="recipe-card-body">
                <div class="recipe-card-header">
                    <h3 class="recipe-card-title">{r.titulo.clone()}</h3>
                    <button
                        class={classes!("btn-favorite", props.is_favorite.then_some("active"))}
                        aria-label="favorite"
                        onclick={on_favorite}
                    >
                        { if props.is_favorite { "❤️" } else { "🤍" } }
                    </button>
                </div>
                <p class="recipe-card-country">{format!("🌍 {}", r.country_name())}</p>
                <p class="recipe-card-description">{r.descripcion.clone()}</p>
                <div class="recipe-card-meta">
                    <span>{format!("⏱️ {}", r.duration_label())}</span>
                    if let Some(dificultad) = r.dificultad.clone() {
                        <span>{format!("📊 {}", dificultad)}</span>
                    }
                    <span>{format!("⭐ {}", r.rating_label())}</span>
                </div>
            </div>
        </article>
    }
}
