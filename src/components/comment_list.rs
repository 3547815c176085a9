// ============================================================================
// COMENTARIOS - lista, edición en línea y formulario nuevo
// ============================================================================

use web_sys::HtmlTextAreaElement;
use yew::prelude::*;
use crate::components::StarRating;
use crate::error::ApiError;
use crate::hooks::use_auth_context;
use crate::models::{Comment, CommentUpdate, NewComment};
use crate::services::{add_comment, edit_comment};
use crate::utils::{alert, MSG_COMMENT_EDIT_FAILED, MSG_COMMENT_SAVE_FAILED, MSG_SESSION_EXPIRED};
use crate::validation::validate_comment;

#[derive(Properties, PartialEq)]
pub struct CommentListProps {
    pub recipe_id: String,
    pub comments: Vec<Comment>,
    /// Se emite tras guardar para recargar la receta
    pub on_changed: Callback<()>,
}

/// Comentario en edición: id, texto y estrellas
#[derive(Clone, PartialEq)]
struct EditingComment {
    id: String,
    texto: String,
    valoracion: u8,
}

#[function_component(CommentList)]
pub fn comment_list(props: &CommentListProps) -> Html {
    let Some(auth) = use_auth_context() else {
        return html! {};
    };
    let new_text = use_state(String::new);
    let new_rating = use_state(|| 0u8);
    let editing = use_state(|| None::<EditingComment>);
    let saving = use_state(|| false);

    let user_id = auth.state.user_id.clone();
    let token = auth.state.token.clone();

    let on_new_text = {
        let new_text = new_text.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            new_text.set(area.value());
        })
    };

    let on_new_rating = {
        let new_rating = new_rating.clone();
        Callback::from(move |stars: u8| new_rating.set(stars))
    };

    let on_submit = {
        let new_text = new_text.clone();
        let new_rating = new_rating.clone();
        let saving = saving.clone();
        let user_id = user_id.clone();
        let token = token.clone();
        let recipe_id = props.recipe_id.clone();
        let on_changed = props.on_changed.clone();
        let expire = auth.expire.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(usuario_id) = user_id.clone() else {
                alert(MSG_SESSION_EXPIRED);
                return;
            };
            if let Err(message) = validate_comment(&new_text, *new_rating) {
                alert(message);
                return;
            }

            let comment = NewComment {
                usuario_id,
                comentario: new_text.trim().to_string(),
                valoracion: *new_rating,
            };
            let new_text = new_text.clone();
            let new_rating = new_rating.clone();
            let saving = saving.clone();
            let token = token.clone();
            let recipe_id = recipe_id.clone();
            let on_changed = on_changed.clone();
            let expire = expire.clone();
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match add_comment(&recipe_id, &comment, token.as_deref()).await {
                    Ok(()) => {
                        new_text.set(String::new());
                        new_rating.set(0);
                        on_changed.emit(());
                    }
                    Err(e) => report(e, MSG_COMMENT_SAVE_FAILED, &expire),
                }
                saving.set(false);
            });
        })
    };

    let on_edit_save = {
        let editing = editing.clone();
        let token = token.clone();
        let recipe_id = props.recipe_id.clone();
        let on_changed = props.on_changed.clone();
        let expire = auth.expire.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(current) = (*editing).clone() else { return };
            if let Err(message) = validate_comment(&current.texto, current.valoracion) {
                alert(message);
                return;
            }
            let update = CommentUpdate {
                comentario: current.texto.trim().to_string(),
                valoracion: current.valoracion,
            };
            let editing = editing.clone();
            let token = token.clone();
            let recipe_id = recipe_id.clone();
            let on_changed = on_changed.clone();
            let expire = expire.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match edit_comment(&recipe_id, &current.id, &update, token.as_deref()).await {
                    Ok(()) => {
                        editing.set(None);
                        on_changed.emit(());
                    }
                    Err(e) => report(e, MSG_COMMENT_EDIT_FAILED, &expire),
                }
            });
        })
    };

    let on_edit_cancel = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(None))
    };

    let render_comment = |comment: &Comment| -> Html {
        if let Some(current) = (*editing).clone().filter(|e| e.id == comment.id) {
            let on_text = {
                let editing = editing.clone();
                let current = current.clone();
                Callback::from(move |e: InputEvent| {
                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                    editing.set(Some(EditingComment { texto: area.value(), ..current.clone() }));
                })
            };
            let on_rating = {
                let editing = editing.clone();
                let current = current.clone();
                Callback::from(move |stars: u8| {
                    editing.set(Some(EditingComment { valoracion: stars, ..current.clone() }));
                })
            };
            return html! {
                <li class="comment editing" key={comment.id.clone()}>
                    <textarea value={current.texto.clone()} oninput={on_text} />
                    <StarRating value={current.valoracion} on_change={on_rating} />
                    <div class="comment-actions">
                        <button class="btn-save" onclick={on_edit_save.clone()}>{"Guardar"}</button>
                        <button class="btn-cancel" onclick={on_edit_cancel.clone()}>{"Cancelar"}</button>
                    </div>
                </li>
            };
        }

        let can_edit = comment.is_editable_by(user_id.as_deref());
        let on_start_edit = {
            let editing = editing.clone();
            let start = EditingComment {
                id: comment.id.clone(),
                texto: comment.texto.clone(),
                valoracion: comment.valoracion,
            };
            Callback::from(move |_: MouseEvent| editing.set(Some(start.clone())))
        };
        html! {
            <li class="comment" key={comment.id.clone()}>
                <div class="comment-header">
                    <strong>{comment.author_name()}</strong>
                    <StarRating value={comment.valoracion} />
                </div>
                <p>{comment.texto.clone()}</p>
                if can_edit {
                    <button class="btn-edit-comment" onclick={on_start_edit}>{"✏️ Editar"}</button>
                }
            </li>
        }
    };

    html! {
        <section class="comments">
            <h2>{format!("💬 Comentarios ({})", props.comments.len())}</h2>
            if props.comments.is_empty() {
                <p class="empty-message">{"Aún no hay comentarios."}</p>
            } else {
                <ul class="comment-list">
                    { for props.comments.iter().map(render_comment) }
                </ul>
            }
            if auth.state.is_logged_in {
                <form class="comment-form" onsubmit={on_submit}>
                    <textarea
                        placeholder="Escribe tu comentario..."
                        value={(*new_text).clone()}
                        oninput={on_new_text}
                    />
                    <StarRating value={*new_rating} on_change={on_new_rating} />
                    <button type="submit" class="btn-comment" disabled={*saving}>
                        { if *saving { "Enviando..." } else { "Comentar" } }
                    </button>
                </form>
            } else {
                <p class="login-hint">{"Inicia sesión para dejar tu comentario."}</p>
            }
        </section>
    }
}

fn report(error: ApiError, fallback: &str, expire: &Callback<()>) {
    log::error!("❌ {}: {}", fallback, error);
    match failure_notice(&error, fallback) {
        Some(message) => alert(&message),
        None => expire.emit(()),
    }
}

/// Texto del aviso; `None` cuando la sesión caducó (401)
fn failure_notice(error: &ApiError, fallback: &str) -> Option<String> {
    if error.status() == Some(401) {
        None
    } else {
        Some(error.user_message(fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_notice_shows_message_once() {
        let fallback = "Error al guardar comentario";
        let network = ApiError::Network("offline".to_string());
        assert_eq!(failure_notice(&network, fallback).as_deref(), Some(fallback));

        let rejected = ApiError::Http { status: 400, message: "Comentario vacío".to_string() };
        assert_eq!(failure_notice(&rejected, fallback).as_deref(), Some("Comentario vacío"));
    }

    #[test]
    fn test_failure_notice_expires_on_401() {
        let expired = ApiError::Http { status: 401, message: "Token inválido".to_string() };
        assert_eq!(failure_notice(&expired, "Error al guardar comentario"), None);
    }
}
