use yew::prelude::*;
use crate::stores::FavoritesStore;
use crate::utils::{alert, BrowserStorage, MSG_FAVORITES_NEED_LOGIN};

#[derive(Clone, PartialEq)]
pub struct UseFavoritesHandle {
    pub favorites: UseStateHandle<FavoritesStore>,
    /// Alterna el id de receta; exige sesión iniciada
    pub toggle: Callback<String>,
}

#[hook]
pub fn use_favorites(is_logged_in: bool) -> UseFavoritesHandle {
    let favorites = use_state(|| FavoritesStore::load(&BrowserStorage));

    let toggle = {
        let favorites = favorites.clone();
        Callback::from(move |recipe_id: String| {
            if !is_logged_in {
                alert(MSG_FAVORITES_NEED_LOGIN);
                return;
            }
            match FavoritesStore::toggle_persisted(&BrowserStorage, &recipe_id) {
                Ok((updated, _)) => favorites.set(updated),
                Err(e) => log::error!("❌ Error guardando favoritos: {}", e),
            }
        })
    };

    UseFavoritesHandle { favorites, toggle }
}
