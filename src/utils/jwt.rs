//! Lectura del payload de un JWT.
//!
//! El cliente no verifica la firma (eso lo hace el backend); solo lee el id
//! del usuario y la expiración para decidir si la sesión guardada sigue viva.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use crate::models::wire::opt_string_or_number;

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct JwtClaims {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub nombre: Option<String>,
}

impl JwtClaims {
    /// `id` si existe; si no, `sub`
    pub fn user_id(&self) -> Option<&str> {
        self.id.as_deref().or(self.sub.as_deref())
    }

    /// Sin `exp` el token se considera vigente
    pub fn is_expired_at(&self, now_secs: i64) -> bool {
        self.exp.is_some_and(|exp| exp <= now_secs)
    }
}

pub fn parse_jwt(token: &str) -> Option<JwtClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}

pub fn is_token_expired(token: &str) -> bool {
    match parse_jwt(token) {
        Some(claims) => claims.is_expired_at(chrono::Utc::now().timestamp()),
        // Tokens opacos: el backend decide
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with(payload: &str) -> String {
        format!("eyJhbGciOiJIUzI1NiJ9.{}.firma", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn test_parse_claims() {
        let token = token_with(r#"{"sub":"ana@recetas.es","id":12,"exp":2000000000}"#);
        let claims = parse_jwt(&token).unwrap();
        assert_eq!(claims.user_id(), Some("12"));
        assert_eq!(claims.sub.as_deref(), Some("ana@recetas.es"));
        assert!(!claims.is_expired_at(1_900_000_000));
        assert!(claims.is_expired_at(2_000_000_000));
    }

    #[test]
    fn test_sub_used_when_no_id() {
        let claims = parse_jwt(&token_with(r#"{"sub":"7"}"#)).unwrap();
        assert_eq!(claims.user_id(), Some("7"));
        assert!(!claims.is_expired_at(i64::MAX));
    }

    #[test]
    fn test_padded_payload_accepted() {
        let token = format!("h.{}==.s", URL_SAFE_NO_PAD.encode(r#"{"id":"1"}"#));
        assert_eq!(parse_jwt(&token).unwrap().user_id(), Some("1"));
    }

    #[test]
    fn test_malformed_tokens() {
        assert!(parse_jwt("").is_none());
        assert!(parse_jwt("solo-una-parte").is_none());
        assert!(parse_jwt("a.%%%.c").is_none());
        assert!(parse_jwt(&token_with("no es json")).is_none());
        assert!(!is_token_expired("fake-token-123"));
    }

    #[test]
    fn test_expired_token() {
        assert!(is_token_expired(&token_with(r#"{"exp":1}"#)));
    }
}
