use serde::{Deserialize, Serialize};
use crate::models::wire::{id_as_number, opt_string_or_number, string_or_number};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, alias = "comentario")]
    pub texto: String,
    #[serde(default)]
    pub valoracion: u8,
    #[serde(default)]
    pub usuario: Option<CommentAuthor>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub usuario_id: Option<String>,
}

/// Autor del comentario: algunas respuestas traen solo el nombre,
/// otras el usuario completo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommentAuthor {
    Name(String),
    User {
        #[serde(deserialize_with = "string_or_number")]
        id: String,
        #[serde(default)]
        nombre: Option<String>,
    },
}

impl Comment {
    pub fn author_name(&self) -> String {
        match &self.usuario {
            Some(CommentAuthor::Name(nombre)) if !nombre.is_empty() => nombre.clone(),
            Some(CommentAuthor::User { nombre: Some(nombre), .. }) if !nombre.is_empty() => nombre.clone(),
            _ => "Anónimo".to_string(),
        }
    }

    pub fn author_id(&self) -> Option<&str> {
        if let Some(id) = self.usuario_id.as_deref() {
            return Some(id);
        }
        match &self.usuario {
            Some(CommentAuthor::User { id, .. }) => Some(id.as_str()),
            _ => None,
        }
    }

    /// Solo el autor del comentario puede editarlo
    pub fn is_editable_by(&self, user_id: Option<&str>) -> bool {
        match (self.author_id(), user_id) {
            (Some(author), Some(user)) => author == user,
            _ => false,
        }
    }

    pub fn stars(&self) -> String {
        "★".repeat(usize::from(self.valoracion.min(MAX_RATING)))
    }
}

pub const MAX_RATING: u8 = 5;

/// Cuerpo de POST `/api/recetas/{id}/comentarios`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    #[serde(serialize_with = "id_as_number")]
    pub usuario_id: String,
    pub comentario: String,
    pub valoracion: u8,
}

/// Cuerpo de PUT `/api/recetas/{id}/comentarios/{comentarioId}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentUpdate {
    pub comentario: String,
    pub valoracion: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_as_plain_name() {
        let c: Comment = serde_json::from_str(
            r#"{"id": 1, "texto": "Muy rica", "valoracion": 4, "usuario": "Lucía"}"#,
        )
        .unwrap();
        assert_eq!(c.author_name(), "Lucía");
        assert_eq!(c.author_id(), None);
        assert!(!c.is_editable_by(Some("3")));
        assert_eq!(c.stars(), "★★★★");
    }

    #[test]
    fn test_author_as_object_and_alias() {
        let c: Comment = serde_json::from_str(
            r#"{"id": "9", "comentario": "Salada", "usuario": {"id": 3, "nombre": "Pedro"}}"#,
        )
        .unwrap();
        assert_eq!(c.texto, "Salada");
        assert_eq!(c.author_name(), "Pedro");
        assert!(c.is_editable_by(Some("3")));
        assert!(!c.is_editable_by(None));
        assert_eq!(c.stars(), "");
    }

    #[test]
    fn test_usuario_id_takes_precedence() {
        let c: Comment =
            serde_json::from_str(r#"{"id": 2, "usuarioId": 8, "usuario": "Ana"}"#).unwrap();
        assert_eq!(c.author_id(), Some("8"));
        assert!(c.is_editable_by(Some("8")));
    }

    #[test]
    fn test_new_comment_body() {
        let body = NewComment {
            usuario_id: "15".to_string(),
            comentario: "Genial".to_string(),
            valoracion: 5,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, serde_json::json!({"usuarioId": 15, "comentario": "Genial", "valoracion": 5}));
    }
}
