use yew::prelude::*;
use crate::hooks::use_auth_context;
use crate::stores::Theme;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let Some(auth) = use_auth_context() else {
        return html! {};
    };
    let show_menu = use_state(|| false);
    let is_logged_in = auth.state.is_logged_in;

    // Sin sesión abre el login; con sesión muestra el menú de logout
    let on_user_click = {
        let show_menu = show_menu.clone();
        let open_login = auth.open_login.clone();
        Callback::from(move |_: MouseEvent| {
            if is_logged_in {
                show_menu.set(!*show_menu);
            } else {
                open_login.emit(());
            }
        })
    };

    let on_logout = {
        let show_menu = show_menu.clone();
        let logout = auth.logout.clone();
        Callback::from(move |_: MouseEvent| {
            show_menu.set(false);
            logout.emit(());
        })
    };

    html! {
        <header class="hero">
            <div class="hero-bg">
                <img src="assets/vuelta.png" alt="Fondo principal" />
                <div class="hero-overlay"></div>
            </div>
            <div class="hero-actions">
                <button
                    class={classes!("user-icon", is_logged_in.then_some("logged-in"))}
                    title={if is_logged_in { "Opciones de usuario" } else { "Iniciar sesión" }}
                    onclick={on_user_click}
                >
                    {"👤"}
                </button>
                if is_logged_in && *show_menu {
                    <div class="user-menu">
                        <button class="btn-logout" onclick={on_logout}>{"Logout"}</button>
                    </div>
                }
                <button
                    class="btn-theme"
                    aria-label="Toggle theme"
                    title={props.theme.toggle_title()}
                    onclick={props.on_toggle_theme.reform(|_| ())}
                >
                    { match props.theme { Theme::Light => "🌙", Theme::Dark => "☀️" } }
                </button>
            </div>
        </header>
    }
}
