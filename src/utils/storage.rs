use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::{window, Storage};
use serde::{Serialize, de::DeserializeOwned};

/// Almacén clave/valor de texto. En el navegador es `localStorage`;
/// en tests, `MemoryStorage`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove_item(&self, key: &str) -> Result<(), String>;
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
        storage.set_item(key, value)
            .map_err(|_| "Error guardando en localStorage".to_string())
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
        storage.remove_item(key)
            .map_err(|_| "Error eliminando de localStorage".to_string())
    }
}

/// Almacén en memoria, compartido entre clones
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

pub fn save_json<S: KeyValueStore + ?Sized, T: Serialize>(store: &S, key: &str, value: &T) -> Result<(), String> {
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando datos: {}", e))?;
    store.set_item(key, &json)
}

pub fn load_json<S: KeyValueStore + ?Sized, T: DeserializeOwned>(store: &S, key: &str) -> Option<T> {
    let json = store.get_item(key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ Valor ilegible en localStorage[{}]: {}", key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let store = MemoryStorage::new();
        assert!(store.is_empty());
        store.set_item("theme", "dark").unwrap();
        assert_eq!(store.get_item("theme").as_deref(), Some("dark"));
        store.remove_item("theme").unwrap();
        assert_eq!(store.get_item("theme"), None);
    }

    #[test]
    fn test_clones_share_items() {
        let store = MemoryStorage::new();
        let other = store.clone();
        other.set_item("userId", "4").unwrap();
        assert_eq!(store.get_item("userId").as_deref(), Some("4"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_json_helpers() {
        let store = MemoryStorage::new();
        save_json(&store, "favorites", &vec!["1", "2"]).unwrap();
        assert_eq!(store.get_item("favorites").as_deref(), Some(r#"["1","2"]"#));
        let loaded: Option<Vec<String>> = load_json(&store, "favorites");
        assert_eq!(loaded, Some(vec!["1".to_string(), "2".to_string()]));
    }

    #[test]
    fn test_corrupt_json_is_ignored() {
        let store = MemoryStorage::new();
        store.set_item("favorites", "{no es json").unwrap();
        let loaded: Option<Vec<String>> = load_json(&store, "favorites");
        assert_eq!(loaded, None);
    }
}
