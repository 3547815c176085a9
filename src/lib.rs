// ============================================================================
// MIS RECETAS - FRONTEND YEW (RUST + WASM)
// ============================================================================
// Capas:
// - Services: SOLO comunicación API
// - Stores: estado de cliente (sesión, favoritos, tema, catálogo)
// - Hooks: conectan stores y services con los componentes
// - Filters / Validation: lógica pura, testeada en nativo
// - Components: vistas Yew
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod utils;
pub mod filters;
pub mod validation;
pub mod stores;
pub mod services;
pub mod hooks;
pub mod routes;
pub mod components;

pub use components::App;
