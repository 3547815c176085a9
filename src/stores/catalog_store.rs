// ============================================================================
// CATALOG STORE - estado de la vista de recetas
// ============================================================================
// Guarda la última lista descargada; vista y país se aplican en memoria.
// Cada descarga lleva un número de petición: solo la última se aplica.
// ============================================================================

use std::rc::Rc;
use yew::Reducible;
use crate::filters::{country_options, filter_recipes, Owner, RecipeView};
use crate::models::Recipe;
use crate::stores::FavoritesStore;
use crate::utils::constants::ALL_COUNTRIES;

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogStore {
    pub recipes: Vec<Recipe>,
    pub loading: bool,
    pub error: Option<String>,
    pub view: RecipeView,
    pub selected_country: String,
    pub request_id: u32,
}

/// Transiciones del catálogo aplicadas sobre el estado vigente
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogAction {
    StartLoading(u32),
    Loaded { request_id: u32, recipes: Vec<Recipe> },
    Failed { request_id: u32, message: String },
    SetView(RecipeView),
    SetCountry(String),
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self {
            recipes: Vec::new(),
            loading: true,
            error: None,
            view: RecipeView::All,
            selected_country: ALL_COUNTRIES.to_string(),
            request_id: 0,
        }
    }
}

impl CatalogStore {
    pub fn with_country(country: Option<String>) -> Self {
        Self {
            selected_country: country
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| ALL_COUNTRIES.to_string()),
            ..Self::default()
        }
    }

    pub fn start_loading(&self, request_id: u32) -> Self {
        Self {
            loading: true,
            request_id,
            ..self.clone()
        }
    }

    /// Respuesta de `request_id`; las respuestas atrasadas se ignoran
    pub fn loaded(&self, request_id: u32, recipes: Vec<Recipe>) -> Self {
        if request_id != self.request_id {
            log::debug!("⏭️ Respuesta {} descartada (vigente {})", request_id, self.request_id);
            return self.clone();
        }
        Self {
            recipes,
            loading: false,
            error: None,
            ..self.clone()
        }
    }

    /// Error de carga: la lista se vacía
    pub fn failed(&self, request_id: u32, message: &str) -> Self {
        if request_id != self.request_id {
            log::debug!("⏭️ Error {} descartado (vigente {})", request_id, self.request_id);
            return self.clone();
        }
        Self {
            recipes: Vec::new(),
            loading: false,
            error: Some(message.to_string()),
            ..self.clone()
        }
    }

    pub fn with_view(&self, view: RecipeView) -> Self {
        Self {
            view,
            ..self.clone()
        }
    }

    pub fn with_selected_country(&self, country: String) -> Self {
        Self {
            selected_country: country,
            ..self.clone()
        }
    }

    pub fn country_options(&self) -> Vec<String> {
        let mut options = country_options(&self.recipes);
        // País preseleccionado desde la portada aunque aún no haya recetas suyas
        if !options.contains(&self.selected_country) {
            options.push(self.selected_country.clone());
        }
        options
    }

    pub fn displayed(&self, favorites: &FavoritesStore, owner: &Owner) -> Vec<Recipe> {
        filter_recipes(&self.recipes, self.view, favorites, &self.selected_country, owner)
    }
}

impl Reducible for CatalogStore {
    type Action = CatalogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            CatalogAction::StartLoading(request_id) => self.start_loading(request_id),
            CatalogAction::Loaded { request_id, recipes } => self.loaded(request_id, recipes),
            CatalogAction::Failed { request_id, message } => self.failed(request_id, &message),
            CatalogAction::SetView(view) => self.with_view(view),
            CatalogAction::SetCountry(country) => self.with_selected_country(country),
        };
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, pais: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            pais_nombre: Some(pais.to_string()),
            ..Recipe::default()
        }
    }

    #[test]
    fn test_lifecycle() {
        let store = CatalogStore::default();
        assert!(store.loading);

        let loaded = store.loaded(0, vec![recipe("1", "India")]);
        assert!(!loaded.loading);
        assert_eq!(loaded.recipes.len(), 1);

        let failed = loaded.start_loading(1).failed(1, "sin red");
        assert!(failed.recipes.is_empty());
        assert_eq!(failed.error.as_deref(), Some("sin red"));

        let again = failed.start_loading(2).loaded(2, vec![]);
        assert_eq!(again.error, None);
    }

    #[test]
    fn test_preselected_country_always_offered() {
        let store = CatalogStore::with_country(Some("Japón".to_string()))
            .loaded(0, vec![recipe("1", "India")]);
        assert_eq!(store.country_options(), vec!["Todos", "India", "Japón"]);
        assert!(store.displayed(&FavoritesStore::default(), &Owner::default()).is_empty());

        let all = store.with_selected_country(ALL_COUNTRIES.to_string());
        assert_eq!(all.country_options(), vec!["Todos", "India"]);
        assert_eq!(all.displayed(&FavoritesStore::default(), &Owner::default()).len(), 1);
    }

    #[test]
    fn test_empty_country_means_all() {
        assert_eq!(CatalogStore::with_country(Some(String::new())).selected_country, "Todos");
        assert_eq!(CatalogStore::with_country(None).selected_country, "Todos");
    }

    #[test]
    fn test_view_change_keeps_recipes() {
        let store = CatalogStore::default().loaded(0, vec![recipe("1", "India")]);
        let favorites_view = store.with_view(RecipeView::Favorites);
        assert_eq!(favorites_view.recipes.len(), 1);
        assert!(favorites_view.displayed(&FavoritesStore::default(), &Owner::default()).is_empty());
    }

    #[test]
    fn test_late_response_keeps_current_choices() {
        let store = Rc::new(CatalogStore::default())
            .reduce(CatalogAction::StartLoading(1))
            .reduce(CatalogAction::SetView(RecipeView::Favorites))
            .reduce(CatalogAction::StartLoading(2))
            .reduce(CatalogAction::SetCountry("India".to_string()));

        // La petición 1 termina tarde: no pisa vista ni país y sigue cargando
        let store = store.reduce(CatalogAction::Loaded {
            request_id: 1,
            recipes: vec![recipe("1", "Perú")],
        });
        assert_eq!(store.view, RecipeView::Favorites);
        assert_eq!(store.selected_country, "India");
        assert!(store.loading);
        assert!(store.recipes.is_empty());

        let store = store.reduce(CatalogAction::Loaded {
            request_id: 2,
            recipes: vec![recipe("2", "India")],
        });
        assert_eq!(store.view, RecipeView::Favorites);
        assert_eq!(store.selected_country, "India");
        assert!(!store.loading);
        assert_eq!(store.recipes.len(), 1);
    }

    #[test]
    fn test_late_failure_is_ignored() {
        let store = Rc::new(CatalogStore::default())
            .reduce(CatalogAction::StartLoading(1))
            .reduce(CatalogAction::StartLoading(2))
            .reduce(CatalogAction::Loaded { request_id: 2, recipes: vec![recipe("1", "India")] })
            .reduce(CatalogAction::Failed { request_id: 1, message: "sin red".to_string() });
        assert_eq!(store.error, None);
        assert_eq!(store.recipes.len(), 1);
    }
}
