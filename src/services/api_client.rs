// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio: construye URLs, añade el Bearer y traduce
// respuestas no-2xx a ApiError.
// ============================================================================

use gloo_net::http::{RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::BackendMessage;

/// Cliente API. El token es opcional: sin él las peticiones van anónimas.
#[derive(Clone, Debug, Default)]
pub struct ApiClient {
    token: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: Option<&str>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()).map(str::to_string),
        }
    }

    /// Exige sesión: sin token devuelve `ApiError::Unauthenticated`
    pub fn authenticated(token: Option<&str>) -> Result<Self, ApiError> {
        let client = Self::with_token(token);
        if client.token.is_none() {
            return Err(ApiError::Unauthenticated);
        }
        Ok(client)
    }

    pub fn url(&self, path: &str) -> String {
        CONFIG.api_url(path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &bearer(token)),
            None => builder,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        let response = self
            .authorize(gloo_net::http::Request::get(&url))
            .send()
            .await?;
        let response = ensure_ok(response).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        let url = self.url(path);
        let response = self
            .authorize(gloo_net::http::Request::post(&url))
            .json(body)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await?;
        ensure_ok(response).await
    }

    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        let url = self.url(path);
        let response = self
            .authorize(gloo_net::http::Request::put(&url))
            .json(body)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await?;
        ensure_ok(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<Response, ApiError> {
        let url = self.url(path);
        let response = self
            .authorize(gloo_net::http::Request::delete(&url))
            .send()
            .await?;
        ensure_ok(response).await
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Pasa las respuestas 2xx; el resto se convierte en `ApiError::Http`
async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    let error = http_error(status, &status_text, &body);
    log::error!("❌ {} {}", response.url(), error);
    Err(error)
}

/// Toma `message`/`mensaje` del cuerpo JSON si existe; si no, el texto
/// plano del cuerpo o el status text.
pub fn http_error(status: u16, status_text: &str, body: &str) -> ApiError {
    let message = serde_json::from_str::<BackendMessage>(body)
        .ok()
        .and_then(BackendMessage::text)
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty() && !trimmed.starts_with('{')).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| status_text.to_string());
    ApiError::Http { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_reads_message_or_mensaje() {
        let err = http_error(400, "Bad Request", r#"{"message":"Título requerido"}"#);
        assert_eq!(err, ApiError::Http { status: 400, message: "Título requerido".to_string() });

        let err = http_error(403, "Forbidden", r#"{"mensaje":"No eres el autor"}"#);
        assert_eq!(err.user_message("x"), "No eres el autor");
    }

    #[test]
    fn test_http_error_without_json_body() {
        let err = http_error(500, "Internal Server Error", "");
        assert_eq!(err.user_message("fallback"), "Internal Server Error");

        let err = http_error(502, "Bad Gateway", "upstream caído");
        assert_eq!(err.user_message("fallback"), "upstream caído");

        let err = http_error(404, "", r#"{"error":"x"}"#);
        assert_eq!(err.user_message("No se pudo cargar la receta."), "No se pudo cargar la receta.");
    }

    #[test]
    fn test_authenticated_requires_token() {
        assert_eq!(ApiClient::authenticated(None).unwrap_err(), ApiError::Unauthenticated);
        assert!(ApiClient::authenticated(Some("")).is_err());
        assert!(ApiClient::authenticated(Some("abc")).is_ok());
        assert_eq!(bearer("abc"), "Bearer abc");
    }
}
