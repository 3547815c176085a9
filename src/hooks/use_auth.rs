// ============================================================================
// USE AUTH - sesión + modal de login/registro compartidos por contexto
// ============================================================================

use yew::prelude::*;
use crate::models::Session;
use crate::stores::AuthStore;
use crate::utils::{alert, BrowserStorage, MSG_SESSION_EXPIRED};

/// Qué formulario muestra el modal de autenticación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthModal {
    #[default]
    Hidden,
    Login,
    Register,
}

#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    pub state: UseStateHandle<AuthStore>,
    pub modal: UseStateHandle<AuthModal>,
    pub sign_in: Callback<Session>,
    pub logout: Callback<()>,
    /// Token rechazado por el backend: cierra sesión y pide login
    pub expire: Callback<()>,
    pub open_login: Callback<()>,
    pub open_register: Callback<()>,
    pub close_modal: Callback<()>,
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let state = use_state(|| AuthStore::load(&BrowserStorage));
    let modal = use_state(AuthModal::default);

    let sign_in = {
        let state = state.clone();
        let modal = modal.clone();
        Callback::from(move |session: Session| {
            match AuthStore::login(&BrowserStorage, session) {
                Ok(auth) => {
                    state.set(auth);
                    modal.set(AuthModal::Hidden);
                }
                Err(e) => log::error!("❌ No se pudo guardar la sesión: {}", e),
            }
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_| state.set(AuthStore::logout(&BrowserStorage)))
    };

    let expire = {
        let state = state.clone();
        let modal = modal.clone();
        Callback::from(move |_| {
            log::warn!("⏰ Sesión rechazada por el servidor");
            state.set(AuthStore::logout(&BrowserStorage));
            alert(MSG_SESSION_EXPIRED);
            modal.set(AuthModal::Login);
        })
    };

    let open_login = {
        let modal = modal.clone();
        Callback::from(move |_| modal.set(AuthModal::Login))
    };

    let open_register = {
        let modal = modal.clone();
        Callback::from(move |_| modal.set(AuthModal::Register))
    };

    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_| modal.set(AuthModal::Hidden))
    };

    UseAuthHandle {
        state,
        modal,
        sign_in,
        logout,
        expire,
        open_login,
        open_register,
        close_modal,
    }
}

/// Provider que envuelve la app y comparte la sesión
#[function_component(AuthContextProvider)]
pub fn auth_context_provider(props: &AuthContextProviderProps) -> Html {
    let auth = use_auth();

    html! {
        <ContextProvider<UseAuthHandle> context={auth}>
            {props.children.clone()}
        </ContextProvider<UseAuthHandle>>
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthContextProviderProps {
    pub children: Children,
}

/// Sesión compartida por `AuthContextProvider`; `None` fuera del provider
#[hook]
pub fn use_auth_context() -> Option<UseAuthHandle> {
    let auth = use_context::<UseAuthHandle>();
    if auth.is_none() {
        log::error!("❌ Componente fuera de AuthContextProvider");
    }
    auth
}
