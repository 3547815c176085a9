use web_sys::HtmlInputElement;
use yew::prelude::*;
use crate::hooks::use_auth_context;
use crate::services::login;
use crate::utils::MSG_LOGIN_FAILED;

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    /// Nombre del usuario que acaba de entrar
    #[prop_or_default]
    pub on_success: Callback<String>,
    pub on_show_register: Callback<()>,
}

#[function_component(Login)]
pub fn login_form(props: &LoginProps) -> Html {
    let Some(auth) = use_auth_context() else {
        return html! {};
    };
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(String::new);
    let submitting = use_state(|| false);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let sign_in = auth.sign_in.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(String::new());

            let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let email = email_input.value();
            let password = password_input.value();
            if email.trim().is_empty() || password.is_empty() {
                error.set(MSG_LOGIN_FAILED.to_string());
                return;
            }

            let error = error.clone();
            let submitting = submitting.clone();
            let sign_in = sign_in.clone();
            let on_success = on_success.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match login(&email, &password).await {
                    Ok(session) => {
                        let nombre = session.nombre.clone();
                        sign_in.emit(session);
                        on_success.emit(nombre);
                    }
                    Err(e) => {
                        log::error!("❌ Error en login: {}", e);
                        error.set(e.user_message(MSG_LOGIN_FAILED));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="auth-form login">
            <h3>{"Iniciar Sesión"}</h3>
            <form onsubmit={on_submit}>
                <div class="form-group">
                    <label for="login-email">{"Correo electrónico"}</label>
                    <input type="email" id="login-email" placeholder="tu@correo.com" ref={email_ref} required=true />
                </div>
                <div class="form-group">
                    <label for="login-password">{"Contraseña"}</label>
                    <input type="password" id="login-password" placeholder="••••••••" ref={password_ref} required=true />
                </div>
                if !error.is_empty() {
                    <p class="form-error">{(*error).clone()}</p>
                }
                <button type="submit" class="btn-primary" disabled={*submitting}>
                    { if *submitting { "Entrando..." } else { "Entrar" } }
                </button>
            </form>
            <p class="auth-switch">
                {"¿No tienes cuenta? "}
                <button type="button" class="btn-link" onclick={props.on_show_register.reform(|_| ())}>
                    {"Regístrate"}
                </button>
            </p>
        </div>
    }
}
