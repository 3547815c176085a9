use yew::prelude::*;
use crate::stores::Theme;
use crate::utils::BrowserStorage;

#[derive(Clone, PartialEq)]
pub struct UseThemeHandle {
    pub theme: UseStateHandle<Theme>,
    pub toggle: Callback<()>,
}

#[hook]
pub fn use_theme() -> UseThemeHandle {
    let theme = use_state(|| Theme::load(&BrowserStorage));

    // Aplicar y guardar en cada cambio
    {
        let current = *theme;
        use_effect_with(current, move |theme| {
            theme.apply();
            if let Err(e) = theme.persist(&BrowserStorage) {
                log::warn!("⚠️ No se pudo guardar el tema: {}", e);
            }
            || ()
        });
    }

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = (*theme).toggled();
            log::info!("🎨 Tema: {}", next.as_str());
            theme.set(next);
        })
    };

    UseThemeHandle { theme, toggle }
}
