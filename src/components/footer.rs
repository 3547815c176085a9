use chrono::Datelike;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="footer">
            <p>{format!("© {} Vuelta al Mundo con Recetas. Todos los derechos reservados.", year)}</p>
        </footer>
    }
}
