use yew::prelude::*;
use crate::hooks::use_auth_context;

const CARDS: [(&str, &str, &str); 3] = [
    (
        "card-orange",
        "→ Colabora",
        "No te guardes tus secretos. Añade tus propias recetas de forma sencilla y comparte tu talento con la comunidad.",
    ),
    (
        "card-red",
        "◇ Explora Sabores",
        "Navega por país, desde los Tacos al Pastor más auténticos hasta la Pasta Carbonara, y guarda tus favoritas.",
    ),
    (
        "card-lime",
        "- Planifica y Organiza",
        "Usa tus Favoritos y el Catálogo para planificar tu menú semanal sin estrés.",
    ),
];

#[function_component(SectionIntro)]
pub fn section_intro() -> Html {
    let Some(auth) = use_auth_context() else {
        return html! {};
    };
    let greeting = match auth.state.display_name() {
        "" => "Bienvenido".to_string(),
        nombre => nombre.to_string(),
    };

    html! {
        <div class="section-intro">
            <h2>{format!("• ¡Hola! {}", greeting)}</h2>
            <p class="intro-lead">{"Encuentra, comparte y planifica tu próxima obra maestra culinaria."}</p>
            <div class="intro-cards">
                { for CARDS.iter().map(|(class, title, text)| html! {
                    <div class={classes!("intro-card", *class)}>
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </div>
                }) }
            </div>
        </div>
    }
}
