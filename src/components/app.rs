use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;
use crate::components::{AuthModalView, Footer, Hero, NavBar};
use crate::config::CONFIG;
use crate::hooks::{use_auth_context, use_theme, AuthContextProvider, AuthModal};
use crate::routes::{switch, Route};
use crate::utils::MSG_REGISTER_OK;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AuthContextProvider>
                <Shell />
            </AuthContextProvider>
        </BrowserRouter>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let theme = use_theme();
    let Some(auth) = use_auth_context() else {
        return html! {};
    };
    let success_message = use_state(|| None::<String>);

    // Aviso de registro y, pasado el tiempo, el login
    let on_register_success = {
        let success_message = success_message.clone();
        let modal = auth.modal.clone();
        Callback::from(move |_: ()| {
            log::info!("✅ Registro completado");
            success_message.set(Some(MSG_REGISTER_OK.to_string()));
            modal.set(AuthModal::Hidden);
            let success_message = success_message.clone();
            let modal = modal.clone();
            Timeout::new(CONFIG.success_banner_ms, move || {
                success_message.set(None);
                modal.set(AuthModal::Login);
            })
            .forget();
        })
    };

    html! {
        <div class="app">
            <Hero theme={*theme.theme} on_toggle_theme={theme.toggle.clone()} />
            <NavBar />
            <Switch<Route> render={switch} />
            <Footer />
            if let Some(message) = (*success_message).clone() {
                <div class="success-backdrop">
                    <div class="success-banner">{message}</div>
                </div>
            }
            <AuthModalView
                {on_register_success}
                suppressed={success_message.is_some()}
            />
        </div>
    }
}
