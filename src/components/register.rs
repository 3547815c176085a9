use web_sys::HtmlInputElement;
use yew::prelude::*;
use crate::error::ApiError;
use crate::services::register;
use crate::utils::MSG_REGISTER_FAILED;
use crate::validation::{validate_register, RegisterErrors, RegisterForm, MSG_FIX_ERRORS};

const MSG_EMAIL_TAKEN: &str = "Correo ya registrado.";

#[derive(Properties, PartialEq)]
pub struct RegisterProps {
    pub on_success: Callback<()>,
    pub on_show_login: Callback<()>,
}

#[derive(Clone, Copy, PartialEq)]
enum Field {
    Nombre,
    Email,
    Password,
}

#[function_component(Register)]
pub fn register_form(props: &RegisterProps) -> Html {
    let form = use_state(RegisterForm::default);
    let errors = use_state(RegisterErrors::default);
    let message = use_state(String::new);
    let submitting = use_state(|| false);

    // Al escribir se borra el error de ese campo
    let on_field = |field: Field| {
        let form = form.clone();
        let errors = errors.clone();
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*form).clone();
            let mut next_errors = (*errors).clone();
            match field {
                Field::Nombre => {
                    next.nombre = value;
                    next_errors.nombre = None;
                }
                Field::Email => {
                    next.email = value;
                    next_errors.email = None;
                }
                Field::Password => {
                    next.password = value;
                    next_errors.password = None;
                }
            }
            form.set(next);
            errors.set(next_errors);
            message.set(String::new());
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let message = message.clone();
        let submitting = submitting.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let found = validate_register(&form);
            if !found.is_empty() {
                errors.set(found);
                message.set(MSG_FIX_ERRORS.to_string());
                return;
            }

            let data = (*form).clone();
            let form = form.clone();
            let errors = errors.clone();
            let message = message.clone();
            let submitting = submitting.clone();
            let on_success = on_success.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match register(&data.nombre, &data.email, &data.password).await {
                    Ok(()) => {
                        form.set(RegisterForm::default());
                        on_success.emit(());
                    }
                    Err(ApiError::Http { status: 409, .. }) => {
                        errors.set(RegisterErrors {
                            email: Some(MSG_EMAIL_TAKEN),
                            ..(*errors).clone()
                        });
                        message.set("❌ Este correo ya está en uso.".to_string());
                    }
                    Err(e) => {
                        log::error!("❌ Error en registro: {}", e);
                        message.set(format!("❌ {}", e.user_message(MSG_REGISTER_FAILED)));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let field = |id: &'static str, label: &'static str, kind: &'static str, value: String, error: Option<&'static str>, oninput: Callback<InputEvent>| {
        html! {
            <div class="form-group">
                <label for={id}>{label}</label>
                <input
                    {id}
                    type={kind}
                    class={classes!(error.is_some().then_some("input-error"))}
                    {value}
                    {oninput}
                />
                if let Some(error) = error {
                    <p class="field-error">{error}</p>
                }
            </div>
        }
    };

    html! {
        <div class="auth-form register">
            <h3>{"Crear Cuenta"}</h3>
            <form onsubmit={on_submit}>
                { field("register-name", "Nombre", "text", form.nombre.clone(), errors.nombre, on_field(Field::Nombre)) }
                { field("register-email", "Correo electrónico", "email", form.email.clone(), errors.email, on_field(Field::Email)) }
                { field("register-password", "Contraseña", "password", form.password.clone(), errors.password, on_field(Field::Password)) }
                if !message.is_empty() {
                    <p class="form-message">{(*message).clone()}</p>
                }
                <button type="submit" class="btn-primary" disabled={*submitting}>
                    { if *submitting { "Registrando..." } else { "Registrarse" } }
                </button>
            </form>
            <p class="auth-switch">
                {"¿Ya tienes cuenta? "}
                <button type="button" class="btn-link" onclick={props.on_show_login.reform(|_| ())}>
                    {"Inicia sesión"}
                </button>
            </p>
        </div>
    }
}
