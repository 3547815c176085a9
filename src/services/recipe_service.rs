// ============================================================================
// RECIPE SERVICE - /api/recetas
// ============================================================================

use crate::error::ApiError;
use crate::models::{Country, Recipe, RecipePayload};
use crate::services::ApiClient;
use crate::utils::DEFAULT_COUNTRIES;

pub async fn fetch_recipes(token: Option<&str>) -> Result<Vec<Recipe>, ApiError> {
    log::info!("📋 Obteniendo recetas...");
    let recipes: Vec<Recipe> = ApiClient::with_token(token).get_json("/recetas").await?;
    log::info!("✅ {} recetas", recipes.len());
    Ok(recipes)
}

/// Recetas creadas por el usuario (vista "Mis recetas")
pub async fn fetch_user_recipes(user_id: &str, token: Option<&str>) -> Result<Vec<Recipe>, ApiError> {
    log::info!("📋 Obteniendo recetas del usuario {}", user_id);
    let recipes: Vec<Recipe> = ApiClient::with_token(token)
        .get_json(&format!("/recetas/usuario/{}", user_id))
        .await?;
    log::info!("✅ {} recetas del usuario {}", recipes.len(), user_id);
    Ok(recipes)
}

pub async fn fetch_recipe(id: &str) -> Result<Recipe, ApiError> {
    log::info!("📖 Obteniendo receta {}", id);
    ApiClient::new().get_json(&format!("/recetas/{}", id)).await
}

/// Crea la receta y devuelve la versión guardada (con su id)
pub async fn create_recipe(payload: &RecipePayload, token: Option<&str>) -> Result<Recipe, ApiError> {
    let client = ApiClient::authenticated(token)?;
    log::info!("🆕 Creando receta '{}'", payload.titulo);
    let response = client.post("/recetas", payload).await?;
    let recipe = response.json::<Recipe>().await?;
    log::info!("✅ Receta creada: {}", recipe.id);
    Ok(recipe)
}

pub async fn update_recipe(id: &str, payload: &RecipePayload, token: Option<&str>) -> Result<(), ApiError> {
    log::info!("💾 Actualizando receta {}", id);
    ApiClient::with_token(token)
        .put(&format!("/recetas/{}", id), payload)
        .await?;
    log::info!("✅ Receta {} actualizada", id);
    Ok(())
}

pub async fn delete_recipe(id: &str, token: Option<&str>) -> Result<(), ApiError> {
    let client = ApiClient::authenticated(token)?;
    log::info!("🗑️ Eliminando receta {}", id);
    client.delete(&format!("/recetas/{}", id)).await?;
    log::info!("✅ Receta {} eliminada", id);
    Ok(())
}

/// Países del backend; si el endpoint falla o viene vacío, la lista fija
pub async fn fetch_countries() -> Vec<Country> {
    match ApiClient::new().get_json::<Vec<Country>>("/recetas/countries").await {
        Ok(countries) if !countries.is_empty() => {
            log::info!("🌍 {} países del servidor", countries.len());
            countries
        }
        Ok(_) => default_countries(),
        Err(e) => {
            log::warn!("⚠️ Países no disponibles ({}), usando lista fija", e);
            default_countries()
        }
    }
}

pub fn default_countries() -> Vec<Country> {
    DEFAULT_COUNTRIES
        .iter()
        .map(|(id, nombre)| Country::new(id, nombre))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_countries_have_unique_ids() {
        let countries = default_countries();
        assert_eq!(countries.len(), DEFAULT_COUNTRIES.len());
        let ids: std::collections::HashSet<_> = countries.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), countries.len());
        assert!(countries.iter().all(|c| !c.nombre.is_empty()));
    }
}
