// ============================================================================
// FAVORITES STORE - ids de recetas favoritas en localStorage
// ============================================================================
// Formato en localStorage["favorites"]: array JSON de ids como texto.
// Sin bloqueo: la última escritura gana.
// ============================================================================

use crate::utils::{load_json, save_json, KeyValueStore, STORAGE_KEY_FAVORITES};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoritesStore {
    ids: Vec<String>,
}

impl FavoritesStore {
    /// Lee los favoritos guardados; los ids repetidos se descartan
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let stored: Vec<serde_json::Value> = load_json(store, STORAGE_KEY_FAVORITES).unwrap_or_default();
        let mut favorites = Self::default();
        for value in stored {
            // Versiones anteriores guardaban ids numéricos
            let id = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                _ => continue,
            };
            if !favorites.contains(&id) {
                favorites.ids.push(id);
            }
        }
        favorites
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|fav| fav == id)
    }

    /// Añade o quita el id. Devuelve `true` si queda como favorito.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|fav| fav == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn persist<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<(), String> {
        save_json(store, STORAGE_KEY_FAVORITES, &self.ids)
    }

    /// Relee localStorage, alterna el id y guarda. Otra pestaña puede haber
    /// escrito entre medias, por eso no se parte del estado en memoria.
    pub fn toggle_persisted<S: KeyValueStore + ?Sized>(store: &S, id: &str) -> Result<(Self, bool), String> {
        let mut favorites = Self::load(store);
        let is_favorite = favorites.toggle(id);
        favorites.persist(store)?;
        log::info!(
            "{} Favorito {}: {} en total",
            if is_favorite { "❤️" } else { "🤍" },
            id,
            favorites.len()
        );
        Ok((favorites, is_favorite))
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryStorage;

    #[test]
    fn test_toggle_updates_persisted_set() {
        let storage = MemoryStorage::new();
        let (favorites, now_favorite) = FavoritesStore::toggle_persisted(&storage, "7").unwrap();
        assert!(now_favorite);
        assert!(favorites.contains("7"));
        assert_eq!(storage.get_item(STORAGE_KEY_FAVORITES).as_deref(), Some(r#"["7"]"#));
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let storage = MemoryStorage::new();
        storage.set_item(STORAGE_KEY_FAVORITES, r#"["1","2"]"#).unwrap();
        let before = FavoritesStore::load(&storage);

        FavoritesStore::toggle_persisted(&storage, "3").unwrap();
        let (after, now_favorite) = FavoritesStore::toggle_persisted(&storage, "3").unwrap();
        assert!(!now_favorite);
        assert_eq!(after, before);
        assert_eq!(storage.get_item(STORAGE_KEY_FAVORITES).as_deref(), Some(r#"["1","2"]"#));
    }

    #[test]
    fn test_load_normalizes_numbers_and_duplicates() {
        let storage = MemoryStorage::new();
        storage.set_item(STORAGE_KEY_FAVORITES, r#"[4, "4", "5", null, 6]"#).unwrap();
        let favorites = FavoritesStore::load(&storage);
        assert_eq!(favorites.ids(), &["4".to_string(), "5".to_string(), "6".to_string()]);
    }

    #[test]
    fn test_toggle_rereads_storage() {
        let storage = MemoryStorage::new();
        let stale = FavoritesStore::load(&storage);
        // Otra pestaña guarda un favorito
        storage.set_item(STORAGE_KEY_FAVORITES, r#"["9"]"#).unwrap();
        let (fresh, _) = FavoritesStore::toggle_persisted(&storage, "1").unwrap();
        assert!(stale.is_empty());
        assert!(fresh.contains("9"));
        assert!(fresh.contains("1"));
        assert_eq!(fresh.len(), 2);
    }

    #[test]
    fn test_missing_or_corrupt_storage_is_empty() {
        let storage = MemoryStorage::new();
        assert!(FavoritesStore::load(&storage).is_empty());
        storage.set_item(STORAGE_KEY_FAVORITES, "null").unwrap();
        assert!(FavoritesStore::load(&storage).is_empty());
    }
}
