use yew::prelude::*;
use crate::models::MAX_RATING;

#[derive(Properties, PartialEq)]
pub struct StarRatingProps {
    pub value: u8,
    /// Sin callback las estrellas son de solo lectura
    #[prop_or_default]
    pub on_change: Option<Callback<u8>>,
}

#[function_component(StarRating)]
pub fn star_rating(props: &StarRatingProps) -> Html {
    html! {
        <div class={classes!("star-rating", props.on_change.is_some().then_some("editable"))}>
            { for (1..=MAX_RATING).map(|star| {
                let filled = star <= props.value;
                let onclick = props.on_change.clone().map(|cb| {
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        cb.emit(star);
                    })
                });
                html! {
                    <button
                        type="button"
                        class={classes!("star", filled.then_some("filled"))}
                        disabled={onclick.is_none()}
                        {onclick}
                    >
                        { if filled { "★" } else { "☆" } }
                    </button>
                }
            }) }
        </div>
    }
}
