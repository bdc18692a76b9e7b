// ============================================================================
// VIEWS - Renderizado DOM (sin lógica de negocio)
// ============================================================================

pub mod affiliates;
pub mod app;
pub mod credits;
pub mod login;
pub mod modal;

pub use app::{render_app, show_section};
pub use login::render_login;
