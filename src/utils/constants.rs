/// Claves de localStorage (compartidas con la versión web anterior)
pub const STORAGE_KEY_TOKEN: &str = "jwtToken";
pub const STORAGE_KEY_USER_ID: &str = "userId";
pub const STORAGE_KEY_USER_NAME: &str = "nombre";
pub const STORAGE_KEY_FAVORITES: &str = "favorites";
pub const STORAGE_KEY_THEME: &str = "theme";

/// Opción del selector de país que desactiva el filtro
pub const ALL_COUNTRIES: &str = "Todos";
pub const UNKNOWN_COUNTRY: &str = "Desconocido";

pub const DIFFICULTIES: [&str; 3] = ["Fácil", "Media", "Difícil"];
pub const DEFAULT_DIFFICULTY: &str = "Media";
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

/// Catálogo de países cuando `/api/recetas/countries` no responde
pub const DEFAULT_COUNTRIES: [(&str, &str); 6] = [
    ("3", "Brasil"),
    ("4", "México"),
    ("5", "España"),
    ("6", "Italia"),
    ("7", "Japón"),
    ("8", "India"),
];

// Mensajes fijos mostrados al usuario
pub const MSG_LOAD_RECIPES_FAILED: &str =
    "No se pudieron cargar las recetas. Verifica tu conexión y vuelve a intentar.";
pub const MSG_UNKNOWN_USER: &str =
    "No se pudo identificar al usuario. Por favor, inicia sesión nuevamente.";
pub const MSG_FAVORITES_NEED_LOGIN: &str = "🔒 Debes iniciar sesión para guardar favoritos.";
pub const MSG_LOAD_RECIPE_FAILED: &str = "No se pudo cargar la receta.";
pub const MSG_UPDATE_RECIPE_FAILED: &str = "No se pudo actualizar la receta.";
pub const MSG_CREATE_RECIPE_FAILED: &str = "Error al registrar la receta";
pub const MSG_DELETE_RECIPE_FAILED: &str = "No se pudo eliminar la receta.";
pub const MSG_LOGIN_FAILED: &str = "Usuario o contraseña incorrectos";
pub const MSG_REGISTER_FAILED: &str = "Registro fallido.";
pub const MSG_REGISTER_OK: &str = "✅ ¡Registro completado con éxito! Ahora puedes iniciar sesión.";
pub const MSG_COMMENT_SAVE_FAILED: &str = "Error al guardar comentario";
pub const MSG_COMMENT_EDIT_FAILED: &str = "No se pudo editar el comentario";
pub const MSG_SESSION_EXPIRED: &str = "Inicia sesión nuevamente.";
