// ============================================================================
// FILTROS DE RECETAS - derivación pura sobre la colección descargada
// ============================================================================
// Todas las vistas (todas / mis recetas / favoritos + país) salen de una sola
// lista de recetas; aquí no hay red ni estado.
// ============================================================================

use std::collections::HashSet;
use crate::models::{Ingredient, Recipe, Step};
use crate::stores::FavoritesStore;
use crate::utils::constants::ALL_COUNTRIES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecipeView {
    #[default]
    All,
    Mine,
    Favorites,
}

impl RecipeView {
    pub fn label(&self) -> &'static str {
        match self {
            RecipeView::All => "Todas",
            RecipeView::Mine => "Mis recetas",
            RecipeView::Favorites => "Favoritos",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            RecipeView::Favorites => "No tienes recetas favoritas aún.",
            RecipeView::Mine => "No has creado ninguna receta aún.",
            RecipeView::All => "No hay recetas disponibles.",
        }
    }

    /// La vista "Mis recetas" se pide a `/api/recetas/usuario/{id}`
    pub fn needs_user_endpoint(&self) -> bool {
        matches!(self, RecipeView::Mine)
    }
}

/// Dueño con el que se compara la vista "Mis recetas"
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Owner {
    pub user_id: Option<String>,
    pub nombre: Option<String>,
}

impl Owner {
    pub fn owns(&self, recipe: &Recipe) -> bool {
        match (&recipe.autor_id, &self.user_id) {
            (Some(author), Some(user)) => return author == user,
            (Some(_), None) => return false,
            _ => {}
        }
        match (&recipe.autor_nombre, &self.nombre) {
            (Some(author), Some(nombre)) => author == nombre,
            (Some(_), None) => false,
            // Sin datos de autor: la lista ya viene filtrada por el backend
            (None, _) => true,
        }
    }
}

pub fn is_all_countries(selection: &str) -> bool {
    selection.is_empty() || selection == ALL_COUNTRIES
}

pub fn matches_country(recipe: &Recipe, selection: &str) -> bool {
    is_all_countries(selection) || recipe.country_name() == selection
}

/// Recetas a mostrar según vista, favoritos y país
pub fn filter_recipes(
    recipes: &[Recipe],
    view: RecipeView,
    favorites: &FavoritesStore,
    country: &str,
    owner: &Owner,
) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|r| match view {
            RecipeView::All => true,
            RecipeView::Favorites => favorites.contains(&r.id),
            RecipeView::Mine => owner.owns(r),
        })
        .filter(|r| matches_country(r, country))
        .cloned()
        .collect()
}

/// "Todos" seguido de los países presentes, en orden de aparición
pub fn country_options(recipes: &[Recipe]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut options = vec![ALL_COUNTRIES.to_string()];
    for name in recipes.iter().map(Recipe::country_name) {
        if seen.insert(name.clone()) {
            options.push(name);
        }
    }
    options
}

/// Quita ingredientes repetidos (mismo nombre, cantidad, unidad y descripción),
/// conservando el primero
pub fn dedup_ingredients(ingredientes: &[Ingredient]) -> Vec<Ingredient> {
    let mut seen = HashSet::new();
    ingredientes
        .iter()
        .filter(|ing| {
            seen.insert((
                ing.nombre.clone(),
                ing.cantidad.clone(),
                ing.unidad.clone(),
                ing.descripcion.clone(),
            ))
        })
        .cloned()
        .collect()
}

/// Ordena por `orden`, elimina pasos vacíos o repetidos y renumera desde 1
pub fn normalize_steps(pasos: &[Step]) -> Vec<Step> {
    let mut sorted: Vec<&Step> = pasos.iter().collect();
    // sort_by_key es estable: pasos con el mismo orden mantienen su posición
    sorted.sort_by_key(|p| p.orden);

    let mut seen = HashSet::new();
    sorted
        .into_iter()
        .filter_map(|p| {
            let descripcion = p.descripcion.trim();
            if descripcion.is_empty() || !seen.insert(descripcion.to_lowercase()) {
                return None;
            }
            Some(Step {
                orden: 0,
                descripcion: descripcion.to_string(),
                foto_url: p.foto_url.trim().to_string(),
            })
        })
        .enumerate()
        .map(|(i, mut step)| {
            step.orden = i as u32 + 1;
            step
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryStorage;

    fn recipe(id: &str, pais: &str, autor: Option<&str>) -> Recipe {
        Recipe {
            id: id.to_string(),
            titulo: format!("Receta {}", id),
            pais_nombre: Some(pais.to_string()),
            autor_id: autor.map(str::to_string),
            ..Recipe::default()
        }
    }

    fn sample() -> Vec<Recipe> {
        vec![
            recipe("1", "México", Some("10")),
            recipe("2", "Italia", Some("11")),
            recipe("3", "México", Some("11")),
            recipe("4", "Japón", None),
        ]
    }

    fn ids(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_all_view_with_todos_keeps_everything() {
        let favorites = FavoritesStore::default();
        let shown = filter_recipes(&sample(), RecipeView::All, &favorites, ALL_COUNTRIES, &Owner::default());
        assert_eq!(ids(&shown), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_country_filter() {
        let favorites = FavoritesStore::default();
        let shown = filter_recipes(&sample(), RecipeView::All, &favorites, "México", &Owner::default());
        assert_eq!(ids(&shown), vec!["1", "3"]);
        let none = filter_recipes(&sample(), RecipeView::All, &favorites, "India", &Owner::default());
        assert!(none.is_empty());
    }

    #[test]
    fn test_favorites_view_intersects_country() {
        let storage = MemoryStorage::new();
        let mut favorites = FavoritesStore::load(&storage);
        favorites.toggle("1");
        favorites.toggle("2");

        let shown = filter_recipes(&sample(), RecipeView::Favorites, &favorites, ALL_COUNTRIES, &Owner::default());
        assert_eq!(ids(&shown), vec!["1", "2"]);

        let italian = filter_recipes(&sample(), RecipeView::Favorites, &favorites, "Italia", &Owner::default());
        assert_eq!(ids(&italian), vec!["2"]);
    }

    #[test]
    fn test_mine_view_by_author_id() {
        let owner = Owner { user_id: Some("11".to_string()), nombre: None };
        let shown = filter_recipes(&sample(), RecipeView::Mine, &FavoritesStore::default(), ALL_COUNTRIES, &owner);
        // "4" no trae autor: se conserva
        assert_eq!(ids(&shown), vec!["2", "3", "4"]);
    }

    #[test]
    fn test_mine_view_by_author_name() {
        let mut r = recipe("5", "India", None);
        r.autor_nombre = Some("Lucía".to_string());
        let owner = Owner { user_id: Some("11".to_string()), nombre: Some("Lucía".to_string()) };
        assert!(owner.owns(&r));
        let stranger = Owner { user_id: None, nombre: Some("Pedro".to_string()) };
        assert!(!stranger.owns(&r));
        assert!(!stranger.owns(&recipe("6", "India", Some("11"))));
    }

    #[test]
    fn test_country_options_distinct_in_order() {
        let mut recipes = sample();
        recipes.push(Recipe { id: "9".to_string(), ..Recipe::default() });
        assert_eq!(
            country_options(&recipes),
            vec!["Todos", "México", "Italia", "Japón", "Desconocido"]
        );
        assert_eq!(country_options(&[]), vec!["Todos"]);
    }

    #[test]
    fn test_empty_messages() {
        assert_eq!(RecipeView::Favorites.empty_message(), "No tienes recetas favoritas aún.");
        assert_eq!(RecipeView::Mine.empty_message(), "No has creado ninguna receta aún.");
        assert_eq!(RecipeView::All.empty_message(), "No hay recetas disponibles.");
        assert!(RecipeView::Mine.needs_user_endpoint());
        assert!(!RecipeView::Favorites.needs_user_endpoint());
    }

    #[test]
    fn test_dedup_ingredients_keeps_first() {
        let sal = Ingredient { nombre: "Sal".into(), cantidad: "1".into(), unidad: "pizca".into(), descripcion: String::new() };
        let aceite = Ingredient { nombre: "Aceite".into(), cantidad: "2".into(), unidad: "cda".into(), descripcion: String::new() };
        let mut otra_sal = sal.clone();
        otra_sal.cantidad = "2".into();

        let cleaned = dedup_ingredients(&[sal.clone(), aceite.clone(), sal.clone(), otra_sal.clone()]);
        assert_eq!(cleaned, vec![sal, aceite, otra_sal]);
    }

    #[test]
    fn test_normalize_steps() {
        let step = |orden: u32, d: &str| Step { orden, descripcion: d.to_string(), foto_url: String::new() };
        let pasos = vec![
            step(3, "Hornear 20 minutos"),
            step(1, "Mezclar la harina"),
            step(2, "   "),
            step(4, "mezclar la harina "),
            step(2, "Amasar"),
        ];
        let normalized = normalize_steps(&pasos);
        let descs: Vec<(u32, &str)> = normalized.iter().map(|p| (p.orden, p.descripcion.as_str())).collect();
        assert_eq!(descs, vec![(1, "Mezclar la harina"), (2, "Amasar"), (3, "Hornear 20 minutos")]);
    }

    #[test]
    fn test_cleaned_recipe_uses_filters() {
        let mut r = recipe("1", "España", None);
        r.pasos = vec![Step { orden: 5, descripcion: "Servir".into(), foto_url: String::new() }];
        let cleaned = r.cleaned();
        assert_eq!(cleaned.pasos[0].orden, 1);
    }
}
