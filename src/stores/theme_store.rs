use crate::utils::{KeyValueStore, STORAGE_KEY_THEME};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Título del botón: ofrece el modo contrario
    pub fn toggle_title(&self) -> &'static str {
        match self {
            Theme::Light => "Modo oscuro",
            Theme::Dark => "Modo claro",
        }
    }

    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        store
            .get_item(STORAGE_KEY_THEME)
            .map(|s| Self::parse(&s))
            .unwrap_or_default()
    }

    pub fn persist<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<(), String> {
        store.set_item(STORAGE_KEY_THEME, self.as_str())
    }

    /// Pone o quita la clase `dark` en `<html>`
    pub fn apply(&self) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let result = match self {
            Theme::Dark => classes.add_1("dark"),
            Theme::Light => classes.remove_1("dark"),
        };
        if result.is_err() {
            log::warn!("⚠️ No se pudo aplicar el tema {}", self.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryStorage;

    #[test]
    fn test_default_is_light() {
        let storage = MemoryStorage::new();
        assert_eq!(Theme::load(&storage), Theme::Light);
        storage.set_item(STORAGE_KEY_THEME, "sepia").unwrap();
        assert_eq!(Theme::load(&storage), Theme::Light);
    }

    #[test]
    fn test_parse_unknown_is_light() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("Dark"), Theme::Light);
        assert_eq!(Theme::parse(""), Theme::Light);
    }

    #[test]
    fn test_toggle_and_persist() {
        let storage = MemoryStorage::new();
        let theme = Theme::load(&storage).toggled();
        theme.persist(&storage).unwrap();
        assert_eq!(storage.get_item(STORAGE_KEY_THEME).as_deref(), Some("dark"));
        assert_eq!(Theme::load(&storage), Theme::Dark);
        assert_eq!(theme.toggle_title(), "Modo claro");
        assert_eq!(theme.toggled(), Theme::Light);
    }
}
