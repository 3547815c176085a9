// ============================================================================
// RECIPE EDITOR - campos compartidos por crear y editar receta
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use crate::models::Country;
use crate::utils::DIFFICULTIES;
use crate::validation::RecipeForm;

#[derive(Properties, PartialEq)]
pub struct RecipeEditorProps {
    pub form: RecipeForm,
    pub countries: Vec<Country>,
    pub on_change: Callback<RecipeForm>,
    pub on_submit: Callback<()>,
    pub submit_label: AttrValue,
    #[prop_or(false)]
    pub submitting: bool,
    #[prop_or_default]
    pub error: Option<String>,
    /// Botones extra junto a "guardar" (volver, eliminar...)
    #[prop_or_default]
    pub children: Children,
}

/// Callback de input que aplica `apply` sobre una copia del formulario
fn on_input<F>(props: &RecipeEditorProps, apply: F) -> Callback<InputEvent>
where
    F: Fn(&mut RecipeForm, String) + 'static,
{
    let form = props.form.clone();
    let on_change = props.on_change.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = form.clone();
        apply(&mut next, input.value());
        on_change.emit(next);
    })
}

fn on_textarea<F>(props: &RecipeEditorProps, apply: F) -> Callback<InputEvent>
where
    F: Fn(&mut RecipeForm, String) + 'static,
{
    let form = props.form.clone();
    let on_change = props.on_change.clone();
    Callback::from(move |e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        let mut next = form.clone();
        apply(&mut next, area.value());
        on_change.emit(next);
    })
}

fn on_select<F>(props: &RecipeEditorProps, apply: F) -> Callback<Event>
where
    F: Fn(&mut RecipeForm, String) + 'static,
{
    let form = props.form.clone();
    let on_change = props.on_change.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let mut next = form.clone();
        apply(&mut next, select.value());
        on_change.emit(next);
    })
}

fn on_click<F>(props: &RecipeEditorProps, apply: F) -> Callback<MouseEvent>
where
    F: Fn(&mut RecipeForm) + 'static,
{
    let form = props.form.clone();
    let on_change = props.on_change.clone();
    Callback::from(move |_: MouseEvent| {
        let mut next = form.clone();
        apply(&mut next);
        on_change.emit(next);
    })
}

#[function_component(RecipeEditor)]
pub fn recipe_editor(props: &RecipeEditorProps) -> Html {
    let form = &props.form;

    let on_submit = {
        let cb = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };

    let ingredient_rows = form.ingredientes.iter().enumerate().map(|(idx, ing)| {
        html! {
            <div class="ingredient-row" key={idx}>
                <input placeholder="Nombre" value={ing.nombre.clone()}
                    oninput={on_input(props, move |f, v| if let Some(i) = f.ingredientes.get_mut(idx) { i.nombre = v })} />
                <input placeholder="Cantidad" value={ing.cantidad.clone()}
                    oninput={on_input(props, move |f, v| if let Some(i) = f.ingredientes.get_mut(idx) { i.cantidad = v })} />
                <input placeholder="Unidad" value={ing.unidad.clone()}
                    oninput={on_input(props, move |f, v| if let Some(i) = f.ingredientes.get_mut(idx) { i.unidad = v })} />
                <input placeholder="Descripción (opcional)" value={ing.descripcion.clone()}
                    oninput={on_input(props, move |f, v| if let Some(i) = f.ingredientes.get_mut(idx) { i.descripcion = v })} />
                <button type="button" class="btn-remove" title="Quitar ingrediente"
                    onclick={on_click(props, move |f| f.remove_ingredient(idx))}>{"✕"}</button>
            </div>
        }
    });

    let step_rows = form.pasos.iter().enumerate().map(|(idx, paso)| {
        html! {
            <div class="step-row" key={idx}>
                <span class="step-number">{paso.orden}</span>
                <textarea placeholder="Describe el paso" value={paso.descripcion.clone()}
                    oninput={on_textarea(props, move |f, v| if let Some(p) = f.pasos.get_mut(idx) { p.descripcion = v })} />
                <input placeholder="URL de foto (opcional)" value={paso.foto_url.clone()}
                    oninput={on_input(props, move |f, v| if let Some(p) = f.pasos.get_mut(idx) { p.foto_url = v })} />
                <button type="button" class="btn-remove" title="Quitar paso"
                    onclick={on_click(props, move |f| f.remove_step(idx))}>{"✕"}</button>
            </div>
        }
    });

    html! {
        <form class="recipe-editor" onsubmit={on_submit}>
            <label>{"Título"}
                <input value={form.titulo.clone()} oninput={on_input(props, |f, v| f.titulo = v)} />
            </label>
            <label>{"Descripción"}
                <textarea value={form.descripcion.clone()} oninput={on_textarea(props, |f, v| f.descripcion = v)} />
            </label>
            <div class="recipe-editor-grid">
                <label>{"Duración (min)"}
                    <input type="number" min="1" value={form.duracion_minutos.clone()}
                        oninput={on_input(props, |f, v| f.duracion_minutos = v)} />
                </label>
                <label>{"Dificultad"}
                    <select onchange={on_select(props, |f, v| f.dificultad = v)}>
                        <option value="" selected={form.dificultad.is_empty()}>{"Selecciona"}</option>
                        { for DIFFICULTIES.iter().map(|d| html! {
                            <option value={*d} selected={form.dificultad == *d}>{*d}</option>
                        }) }
                    </select>
                </label>
                <label>{"País"}
                    <select onchange={on_select(props, |f, v| f.pais_id = v)}>
                        <option value="" selected={form.pais_id.is_empty()}>{"Selecciona un país"}</option>
                        { for props.countries.iter().map(|c| html! {
                            <option value={c.id.clone()} selected={form.pais_id == c.id}>{c.nombre.clone()}</option>
                        }) }
                    </select>
                </label>
            </div>
            <label>{"URL de la foto"}
                <input type="url" value={form.foto_url.clone()} oninput={on_input(props, |f, v| f.foto_url = v)} />
            </label>

            <fieldset class="ingredients-editor">
                <legend>{"🧂 Ingredientes"}</legend>
                { for ingredient_rows }
                <button type="button" class="btn-add" onclick={on_click(props, |f| f.add_ingredient())}>
                    {"+ Añadir ingrediente"}
                </button>
            </fieldset>

            <fieldset class="steps-editor">
                <legend>{"👨‍🍳 Pasos"}</legend>
                { for step_rows }
                <button type="button" class="btn-add" onclick={on_click(props, |f| f.add_step())}>
                    {"+ Añadir paso"}
                </button>
            </fieldset>

            if let Some(error) = props.error.clone() {
                <p class="form-error">{error}</p>
            }

            <div class="recipe-editor-actions">
                <button type="submit" class="btn-primary" disabled={props.submitting}>
                    { if props.submitting { "Guardando...".to_string() } else { props.submit_label.to_string() } }
                </button>
                {props.children.clone()}
            </div>
        </form>
    }
}
