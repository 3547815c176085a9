use yew::prelude::*;
use yew_router::prelude::*;
use crate::routes::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h2>{"404"}</h2>
            <p>{"Página no encontrada"}</p>
            <Link<Route> to={Route::Home}>{"Volver al inicio"}</Link<Route>>
        </div>
    }
}
