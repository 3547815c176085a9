// ============================================================================
// VALIDACIÓN DE FORMULARIOS - receta y registro
// ============================================================================

use crate::models::{Ingredient, RecipePayload, Step, MAX_RATING};

pub const MSG_REQUIRED_FIELDS: &str = "🚨 Completa los campos de Título, Descripción y País.";
pub const MSG_INVALID_DURATION: &str = "🚨 La duración debe ser mayor a 0 minutos.";
pub const MSG_MISSING_DIFFICULTY: &str = "🚨 Por favor selecciona una dificultad.";
pub const MSG_NO_INGREDIENTS: &str = "🚨 Añade al menos un ingrediente válido.";
pub const MSG_NO_STEPS: &str = "🚨 Añade al menos un paso de preparación.";
pub const MSG_LOGIN_TO_CREATE: &str = "🔐 Debes iniciar sesión para registrar una receta";

pub const MSG_NAME_REQUIRED: &str = "El nombre es obligatorio.";
pub const MSG_EMAIL_REQUIRED: &str = "El correo electrónico es obligatorio.";
pub const MSG_EMAIL_INVALID: &str = "El correo electrónico no es válido.";
pub const MSG_PASSWORD_REQUIRED: &str = "La contraseña es obligatoria.";
pub const MSG_PASSWORD_WEAK: &str = "8+ caracteres, Mayúscula, Número.";
pub const MSG_FIX_ERRORS: &str = "🚨 Corrige los errores.";

pub const MSG_EMPTY_COMMENT: &str = "✍️ Escribe un comentario.";
pub const MSG_MISSING_RATING: &str = "⭐ Elige una valoración de 1 a 5.";

const MIN_PASSWORD_LEN: usize = 8;

/// Estado del formulario de receta tal como lo escriben los inputs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipeForm {
    pub titulo: String,
    pub descripcion: String,
    pub duracion_minutos: String,
    pub dificultad: String,
    pub foto_url: String,
    pub pais_id: String,
    pub ingredientes: Vec<Ingredient>,
    pub pasos: Vec<Step>,
}

impl RecipeForm {
    /// Formulario nuevo: una fila vacía de ingrediente y de paso
    pub fn blank() -> Self {
        Self {
            duracion_minutos: crate::utils::DEFAULT_DURATION_MINUTES.to_string(),
            dificultad: crate::utils::DEFAULT_DIFFICULTY.to_string(),
            ingredientes: vec![Ingredient::default()],
            pasos: vec![Step { orden: 1, ..Step::default() }],
            ..Self::default()
        }
    }

    /// Rellena el formulario con una receta existente
    pub fn from_payload(payload: &RecipePayload) -> Self {
        Self {
            titulo: payload.titulo.clone(),
            descripcion: payload.descripcion.clone(),
            duracion_minutos: payload.duracion_minutos.to_string(),
            dificultad: payload.dificultad.clone(),
            foto_url: payload.foto_url.clone(),
            pais_id: payload.pais_id.clone().unwrap_or_default(),
            ingredientes: payload.ingredientes.clone(),
            pasos: payload.pasos.clone(),
        }
    }

    pub fn add_ingredient(&mut self) {
        self.ingredientes.push(Ingredient::default());
    }

    pub fn remove_ingredient(&mut self, index: usize) {
        if index < self.ingredientes.len() {
            self.ingredientes.remove(index);
        }
    }

    pub fn add_step(&mut self) {
        let orden = self.pasos.len() as u32 + 1;
        self.pasos.push(Step { orden, ..Step::default() });
    }

    /// Quita el paso y renumera los restantes
    pub fn remove_step(&mut self, index: usize) {
        if index < self.pasos.len() {
            self.pasos.remove(index);
        }
        for (i, paso) in self.pasos.iter_mut().enumerate() {
            paso.orden = i as u32 + 1;
        }
    }

    fn duration(&self) -> Option<u32> {
        self.duracion_minutos.trim().parse::<u32>().ok().filter(|m| *m >= 1)
    }
}

fn is_complete_ingredient(i: &Ingredient) -> bool {
    !i.nombre.trim().is_empty() && !i.cantidad.trim().is_empty() && !i.unidad.trim().is_empty()
}

/// Devuelve el primer error del formulario, o `Ok` si es válido
pub fn validate_recipe_form(form: &RecipeForm) -> Result<(), &'static str> {
    if form.titulo.trim().is_empty() || form.descripcion.trim().is_empty() || form.pais_id.trim().is_empty() {
        return Err(MSG_REQUIRED_FIELDS);
    }
    if form.duration().is_none() {
        return Err(MSG_INVALID_DURATION);
    }
    if form.dificultad.trim().is_empty() {
        return Err(MSG_MISSING_DIFFICULTY);
    }
    if !form.ingredientes.iter().any(is_complete_ingredient) {
        return Err(MSG_NO_INGREDIENTS);
    }
    if !form.pasos.iter().any(|p| !p.descripcion.trim().is_empty()) {
        return Err(MSG_NO_STEPS);
    }
    Ok(())
}

/// Payload limpio: campos recortados, sin filas incompletas, pasos 1..n
pub fn build_recipe_payload(form: &RecipeForm) -> RecipePayload {
    let ingredientes = form
        .ingredientes
        .iter()
        .filter(|i| is_complete_ingredient(i))
        .map(|i| Ingredient {
            nombre: i.nombre.trim().to_string(),
            cantidad: i.cantidad.trim().to_string(),
            unidad: i.unidad.trim().to_string(),
            descripcion: i.descripcion.trim().to_string(),
        })
        .collect();

    let pasos = form
        .pasos
        .iter()
        .filter(|p| !p.descripcion.trim().is_empty())
        .enumerate()
        .map(|(index, p)| Step {
            orden: index as u32 + 1,
            descripcion: p.descripcion.trim().to_string(),
            foto_url: p.foto_url.trim().to_string(),
        })
        .collect();

    let pais_id = form.pais_id.trim();
    RecipePayload {
        titulo: form.titulo.trim().to_string(),
        descripcion: form.descripcion.trim().to_string(),
        duracion_minutos: form.duration().unwrap_or(0),
        dificultad: form.dificultad.trim().to_string(),
        foto_url: form.foto_url.trim().to_string(),
        pais_id: (!pais_id.is_empty()).then(|| pais_id.to_string()),
        ingredientes,
        pasos,
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegisterForm {
    pub nombre: String,
    pub email: String,
    pub password: String,
}

/// Errores por campo del registro
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegisterErrors {
    pub nombre: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl RegisterErrors {
    pub fn is_empty(&self) -> bool {
        self.nombre.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// `algo@algo.algo` sin espacios
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((user, domain)) = email.split_once('@') else {
        return false;
    };
    let Some(dot) = domain.rfind('.') else {
        return false;
    };
    !user.is_empty() && dot > 0 && dot + 1 < domain.len()
}

/// Mínimo 8 caracteres, una mayúscula y un número
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

pub fn validate_register(form: &RegisterForm) -> RegisterErrors {
    let mut errors = RegisterErrors::default();

    if form.nombre.trim().is_empty() {
        errors.nombre = Some(MSG_NAME_REQUIRED);
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.email = Some(MSG_EMAIL_REQUIRED);
    } else if !is_valid_email(email) {
        errors.email = Some(MSG_EMAIL_INVALID);
    }

    if form.password.is_empty() {
        errors.password = Some(MSG_PASSWORD_REQUIRED);
    } else if !is_strong_password(&form.password) {
        errors.password = Some(MSG_PASSWORD_WEAK);
    }

    errors
}

/// Comentario nuevo o editado: texto y de 1 a 5 estrellas
pub fn validate_comment(texto: &str, valoracion: u8) -> Result<(), &'static str> {
    if texto.trim().is_empty() {
        return Err(MSG_EMPTY_COMMENT);
    }
    if !(1..=MAX_RATING).contains(&valoracion) {
        return Err(MSG_MISSING_RATING);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RecipeForm {
        RecipeForm {
            titulo: " Tacos al pastor ".to_string(),
            descripcion: "Clásico".to_string(),
            duracion_minutos: "45".to_string(),
            dificultad: "Media".to_string(),
            foto_url: String::new(),
            pais_id: "4".to_string(),
            ingredientes: vec![
                Ingredient {
                    nombre: " Cerdo ".into(),
                    cantidad: "500".into(),
                    unidad: "g".into(),
                    descripcion: String::new(),
                },
                Ingredient { nombre: "Piña".into(), ..Ingredient::default() },
            ],
            pasos: vec![
                Step { orden: 1, descripcion: "  ".into(), foto_url: String::new() },
                Step { orden: 2, descripcion: "Marinar".into(), foto_url: String::new() },
                Step { orden: 3, descripcion: " Asar ".into(), foto_url: String::new() },
            ],
        }
    }

    #[test]
    fn test_valid_recipe_form() {
        assert_eq!(validate_recipe_form(&valid_form()), Ok(()));
    }

    #[test]
    fn test_first_failure_wins() {
        let mut form = valid_form();
        form.titulo.clear();
        form.duracion_minutos = "0".to_string();
        assert_eq!(validate_recipe_form(&form), Err(MSG_REQUIRED_FIELDS));

        let mut form = valid_form();
        form.duracion_minutos = "0".to_string();
        assert_eq!(validate_recipe_form(&form), Err(MSG_INVALID_DURATION));
        form.duracion_minutos = "abc".to_string();
        assert_eq!(validate_recipe_form(&form), Err(MSG_INVALID_DURATION));

        let mut form = valid_form();
        form.dificultad.clear();
        assert_eq!(validate_recipe_form(&form), Err(MSG_MISSING_DIFFICULTY));

        let mut form = valid_form();
        form.ingredientes.remove(0);
        assert_eq!(validate_recipe_form(&form), Err(MSG_NO_INGREDIENTS));

        let mut form = valid_form();
        form.pasos.truncate(1);
        assert_eq!(validate_recipe_form(&form), Err(MSG_NO_STEPS));
    }

    #[test]
    fn test_build_payload_cleans_rows() {
        let payload = build_recipe_payload(&valid_form());
        assert_eq!(payload.titulo, "Tacos al pastor");
        assert_eq!(payload.duracion_minutos, 45);
        assert_eq!(payload.pais_id.as_deref(), Some("4"));
        assert_eq!(payload.ingredientes.len(), 1);
        assert_eq!(payload.ingredientes[0].nombre, "Cerdo");
        let pasos: Vec<_> = payload.pasos.iter().map(|p| (p.orden, p.descripcion.as_str())).collect();
        assert_eq!(pasos, vec![(1, "Marinar"), (2, "Asar")]);
    }

    #[test]
    fn test_blank_form_defaults() {
        let form = RecipeForm::blank();
        assert_eq!(form.duracion_minutos, "30");
        assert_eq!(form.dificultad, "Media");
        assert_eq!(validate_recipe_form(&form), Err(MSG_REQUIRED_FIELDS));
    }

    #[test]
    fn test_register_errors_per_field() {
        let errors = validate_register(&RegisterForm::default());
        assert_eq!(errors.nombre, Some(MSG_NAME_REQUIRED));
        assert_eq!(errors.email, Some(MSG_EMAIL_REQUIRED));
        assert_eq!(errors.password, Some(MSG_PASSWORD_REQUIRED));

        let errors = validate_register(&RegisterForm {
            nombre: "Ana".into(),
            email: "ana@correo".into(),
            password: "corta1A".into(),
        });
        assert_eq!(errors.nombre, None);
        assert_eq!(errors.email, Some(MSG_EMAIL_INVALID));
        assert_eq!(errors.password, Some(MSG_PASSWORD_WEAK));

        let errors = validate_register(&RegisterForm {
            nombre: "Ana".into(),
            email: "ana@correo.es".into(),
            password: "Segura123".into(),
        });
        assert!(errors.is_empty());
    }

    #[test]
    fn test_password_rule() {
        assert!(!is_strong_password("sinmayus1"));
        assert!(!is_strong_password("SinNumero"));
        assert!(is_strong_password("Ñandú2024X"));
    }

    #[test]
    fn test_remove_step_renumbers() {
        let mut form = RecipeForm::blank();
        form.add_step();
        form.add_step();
        form.pasos[2].descripcion = "Servir".into();
        form.remove_step(0);
        let pasos: Vec<_> = form.pasos.iter().map(|p| (p.orden, p.descripcion.as_str())).collect();
        assert_eq!(pasos, vec![(1, ""), (2, "Servir")]);

        form.remove_ingredient(5);
        assert_eq!(form.ingredientes.len(), 1);
        form.add_ingredient();
        form.remove_ingredient(0);
        assert_eq!(form.ingredientes.len(), 1);
    }

    #[test]
    fn test_comment_rules() {
        assert_eq!(validate_comment("  ", 4), Err(MSG_EMPTY_COMMENT));
        assert_eq!(validate_comment("Rico", 0), Err(MSG_MISSING_RATING));
        assert_eq!(validate_comment("Rico", 6), Err(MSG_MISSING_RATING));
        assert_eq!(validate_comment("Rico", 5), Ok(()));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a@b."));
    }
}
