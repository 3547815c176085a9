// ============================================================================
// AUTH STORE - sesión JWT persistida en localStorage
// ============================================================================

use serde::{Deserialize, Serialize};
use crate::filters::Owner;
use crate::models::{Recipe, Session};
use crate::utils::{
    is_token_expired, parse_jwt, KeyValueStore, STORAGE_KEY_TOKEN, STORAGE_KEY_USER_ID,
    STORAGE_KEY_USER_NAME,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AuthStore {
    pub is_logged_in: bool,
    pub user_id: Option<String>,
    pub nombre: Option<String>,
    pub token: Option<String>,
}

impl AuthStore {
    /// Restaura la sesión guardada. Un token caducado cierra la sesión.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let Some(token) = store.get_item(STORAGE_KEY_TOKEN).filter(|t| !t.is_empty()) else {
            return Self::default();
        };

        if is_token_expired(&token) {
            log::warn!("⏰ Token caducado, se cierra la sesión guardada");
            return Self::logout(store);
        }

        // userId puede faltar si el login se hizo con una versión antigua
        let user_id = store
            .get_item(STORAGE_KEY_USER_ID)
            .filter(|id| !id.is_empty() && id != "undefined")
            .or_else(|| parse_jwt(&token).and_then(|c| c.user_id().map(str::to_string)));

        Self {
            is_logged_in: true,
            user_id,
            nombre: store.get_item(STORAGE_KEY_USER_NAME).filter(|n| !n.is_empty()),
            token: Some(token),
        }
    }

    /// Guarda token, id y nombre del usuario
    pub fn login<S: KeyValueStore + ?Sized>(store: &S, session: Session) -> Result<Self, String> {
        store.set_item(STORAGE_KEY_TOKEN, &session.token)?;
        match &session.user_id {
            Some(id) => store.set_item(STORAGE_KEY_USER_ID, id)?,
            None => store.remove_item(STORAGE_KEY_USER_ID)?,
        }
        store.set_item(STORAGE_KEY_USER_NAME, &session.nombre)?;

        log::info!("✅ Sesión iniciada: {}", session.nombre);
        Ok(Self {
            is_logged_in: true,
            user_id: session.user_id,
            nombre: Some(session.nombre).filter(|n| !n.is_empty()),
            token: Some(session.token),
        })
    }

    pub fn logout<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        for key in [STORAGE_KEY_TOKEN, STORAGE_KEY_USER_ID, STORAGE_KEY_USER_NAME] {
            if let Err(e) = store.remove_item(key) {
                log::error!("❌ Error limpiando {}: {}", key, e);
            }
        }
        log::info!("👋 Logout");
        Self::default()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn display_name(&self) -> &str {
        self.nombre.as_deref().unwrap_or("")
    }

    pub fn owner(&self) -> Owner {
        Owner {
            user_id: self.user_id.clone(),
            nombre: self.nombre.clone(),
        }
    }

    /// El botón "Editar receta" solo aparece para el autor
    pub fn can_edit(&self, recipe: &Recipe) -> bool {
        self.is_logged_in
            && self
                .user_id
                .as_deref()
                .is_some_and(|id| recipe.is_owned_by(id))
    }
}
