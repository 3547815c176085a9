use yew::prelude::*;
use crate::components::{Login, Register};
use crate::hooks::{use_auth_context, AuthModal};

#[derive(Properties, PartialEq)]
pub struct AuthModalViewProps {
    pub on_register_success: Callback<()>,
    /// Oculto mientras se muestra el aviso de registro
    #[prop_or(false)]
    pub suppressed: bool,
}

#[function_component(AuthModalView)]
pub fn auth_modal_view(props: &AuthModalViewProps) -> Html {
    let Some(auth) = use_auth_context() else {
        return html! {};
    };

    if *auth.modal == AuthModal::Hidden || auth.state.is_logged_in || props.suppressed {
        return html! {};
    }

    let content = match *auth.modal {
        AuthModal::Register => html! {
            <Register on_success={props.on_register_success.clone()} on_show_login={auth.open_login.clone()} />
        },
        _ => html! {
            <Login
                on_success={Callback::from(|nombre: String| log::info!("👋 Bienvenido, {}", nombre))}
                on_show_register={auth.open_register.clone()}
            />
        },
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal auth-modal">
                <button class="btn-close" onclick={auth.close_modal.reform(|_| ())}>{"✕"}</button>
                {content}
            </div>
        </div>
    }
}
