// ============================================================================
// APP - Aplicación principal
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::services::{LocalStorageBackend, SessionStore};
use crate::state::AppState;
use crate::views::render_app;

/// Aplicación principal: dueña del estado y del nodo raíz
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear la aplicación y restaurar la sesión persistida si existe.
    /// No se valida el token contra el servidor: si expiró, la primera
    /// llamada al API lo descubre.
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let session = SessionStore::new(Rc::new(LocalStorageBackend));
        if session.restore() {
            log::info!("💾 Sesión encontrada en storage, entrando directo al panel");
        }

        Ok(Self {
            state: AppState::new(session),
            root,
        })
    }

    /// Re-render completo: se limpia el nodo raíz y se vuelve a montar
    /// la vista según el estado actual
    pub fn render(&self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let view = render_app(&self.state)?;
        append_child(&self.root, &view)?;
        Ok(())
    }
}
