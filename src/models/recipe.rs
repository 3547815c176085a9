use serde::{Deserialize, Serialize};
use crate::models::comment::Comment;
use crate::models::wire::{null_as_default, opt_id_as_number, opt_string_or_number, string_or_number};
use crate::utils::constants::UNKNOWN_COUNTRY;

/// Receta tal como la devuelve `/api/recetas`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub titulo: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub duracion_minutos: Option<u32>,
    #[serde(default)]
    pub dificultad: Option<String>,
    #[serde(default)]
    pub foto_url: Option<String>,

    // País: el backend nuevo manda paisId/paisNombre, el antiguo `pais`
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub pais_id: Option<String>,
    #[serde(default)]
    pub pais_nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pais: Option<CountryRef>,

    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub autor_id: Option<String>,
    #[serde(default)]
    pub autor_nombre: Option<String>,
    #[serde(default)]
    pub valoracion: Option<f64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredientes: Vec<Ingredient>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pasos: Vec<Step>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comentarios: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Ingredient {
    #[serde(default)]
    pub nombre: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub cantidad: String,
    #[serde(default)]
    pub unidad: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub descripcion: String,
}

/// Paso de preparación
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    #[serde(default)]
    pub orden: u32,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub foto_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub nombre: String,
}

impl Country {
    pub fn new(id: &str, nombre: &str) -> Self {
        Self {
            id: id.to_string(),
            nombre: nombre.to_string(),
        }
    }
}

/// `pais` en respuestas antiguas: texto plano u objeto
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CountryRef {
    Name(String),
    Country(Country),
}

impl Recipe {
    /// Nombre del país para mostrar y filtrar
    pub fn country_name(&self) -> String {
        if let Some(nombre) = self.pais_nombre.as_ref().filter(|n| !n.is_empty()) {
            return nombre.clone();
        }
        match &self.pais {
            Some(CountryRef::Name(nombre)) if !nombre.is_empty() => nombre.clone(),
            Some(CountryRef::Country(pais)) if !pais.nombre.is_empty() => pais.nombre.clone(),
            _ => UNKNOWN_COUNTRY.to_string(),
        }
    }

    /// Id del país, buscándolo en el catálogo por nombre si falta
    pub fn resolved_country_id(&self, countries: &[Country]) -> Option<String> {
        if let Some(id) = self.pais_id.as_ref().filter(|id| !id.is_empty()) {
            return Some(id.clone());
        }
        if let Some(CountryRef::Country(pais)) = &self.pais {
            return Some(pais.id.clone());
        }
        let nombre = self.country_name();
        countries
            .iter()
            .find(|c| c.nombre == nombre)
            .map(|c| c.id.clone())
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.autor_id.as_deref() == Some(user_id)
    }

    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.valoracion.unwrap_or(0.0))
    }

    pub fn duration_label(&self) -> String {
        match self.duracion_minutos {
            Some(min) => format!("{} min", min),
            None => "-".to_string(),
        }
    }

    pub fn has_photo(&self) -> bool {
        self.foto_url.as_ref().is_some_and(|url| !url.trim().is_empty())
    }

    /// Receta con ingredientes y pasos sin duplicados (para detalle y edición)
    pub fn cleaned(mut self) -> Self {
        self.ingredientes = crate::filters::dedup_ingredients(&self.ingredientes);
        self.pasos = crate::filters::normalize_steps(&self.pasos);
        self
    }

    /// Campos editables como payload de PUT
    pub fn to_payload(&self, countries: &[Country]) -> RecipePayload {
        RecipePayload {
            titulo: self.titulo.clone(),
            descripcion: self.descripcion.clone(),
            duracion_minutos: self.duracion_minutos.unwrap_or(0),
            dificultad: self.dificultad.clone().unwrap_or_default(),
            foto_url: self.foto_url.clone().unwrap_or_default(),
            pais_id: self.resolved_country_id(countries),
            ingredientes: self.ingredientes.clone(),
            pasos: self.pasos.clone(),
        }
    }
}

/// Cuerpo de POST/PUT `/api/recetas`
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecipePayload {
    pub titulo: String,
    pub descripcion: String,
    pub duracion_minutos: u32,
    pub dificultad: String,
    pub foto_url: String,
    #[serde(serialize_with = "opt_id_as_number", skip_serializing_if = "Option::is_none")]
    pub pais_id: Option<String>,
    pub ingredientes: Vec<Ingredient>,
    pub pasos: Vec<Step>,
}

/// Respuesta de error del backend (`message` o `mensaje` según el endpoint)
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct BackendMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub mensaje: Option<String>,
}

impl BackendMessage {
    pub fn text(self) -> Option<String> {
        self.message.or(self.mensaje).filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_current_backend_shape() {
        let json = r#"{
            "id": 12,
            "titulo": "Tacos al pastor",
            "descripcion": "Clásico",
            "duracionMinutos": 45,
            "dificultad": "Media",
            "fotoUrl": null,
            "paisId": 4,
            "paisNombre": "México",
            "autorId": 3,
            "ingredientes": [{"nombre": "Cerdo", "cantidad": 500, "unidad": "g", "descripcion": null}],
            "pasos": null,
            "comentarios": []
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, "12");
        assert_eq!(recipe.pais_id.as_deref(), Some("4"));
        assert_eq!(recipe.country_name(), "México");
        assert_eq!(recipe.ingredientes[0].cantidad, "500");
        assert_eq!(recipe.ingredientes[0].descripcion, "");
        assert!(recipe.pasos.is_empty());
        assert!(recipe.is_owned_by("3"));
        assert!(!recipe.has_photo());
    }

    #[test]
    fn test_legacy_pais_shapes() {
        let plain: Recipe = serde_json::from_str(r#"{"id": "a", "pais": "Italia"}"#).unwrap();
        assert_eq!(plain.country_name(), "Italia");

        let object: Recipe =
            serde_json::from_str(r#"{"id": "b", "pais": {"id": 7, "nombre": "Japón"}}"#).unwrap();
        assert_eq!(object.country_name(), "Japón");
        assert_eq!(object.resolved_country_id(&[]).as_deref(), Some("7"));

        let none: Recipe = serde_json::from_str(r#"{"id": "c"}"#).unwrap();
        assert_eq!(none.country_name(), UNKNOWN_COUNTRY);
    }

    #[test]
    fn test_country_id_resolved_by_name() {
        let recipe: Recipe = serde_json::from_str(r#"{"id": 1, "pais": "España"}"#).unwrap();
        let countries = vec![Country::new("5", "España"), Country::new("6", "Italia")];
        assert_eq!(recipe.resolved_country_id(&countries).as_deref(), Some("5"));
        assert_eq!(recipe.resolved_country_id(&[]), None);
    }

    #[test]
    fn test_labels() {
        let mut recipe = Recipe::default();
        assert_eq!(recipe.rating_label(), "0.0");
        assert_eq!(recipe.duration_label(), "-");
        recipe.valoracion = Some(4.26);
        recipe.duracion_minutos = Some(30);
        assert_eq!(recipe.rating_label(), "4.3");
        assert_eq!(recipe.duration_label(), "30 min");
    }

    #[test]
    fn test_payload_serializes_numeric_country() {
        let recipe = Recipe {
            id: "1".to_string(),
            titulo: "Paella".to_string(),
            pais_id: Some("5".to_string()),
            duracion_minutos: Some(60),
            ..Recipe::default()
        };
        let value = serde_json::to_value(recipe.to_payload(&[])).unwrap();
        assert_eq!(value["paisId"], 5);
        assert_eq!(value["duracionMinutos"], 60);
        assert_eq!(value["titulo"], "Paella");
    }

    #[test]
    fn test_backend_message() {
        let msg: BackendMessage = serde_json::from_str(r#"{"mensaje": "Sin permiso"}"#).unwrap();
        assert_eq!(msg.text().as_deref(), Some("Sin permiso"));
        let empty: BackendMessage = serde_json::from_str(r#"{"message": "  "}"#).unwrap();
        assert_eq!(empty.text(), None);
    }
}
