// ============================================================================
// COOPCREDIT PORTAL - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Arquitectura:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Mapeo puro dominio → filas/mensajes (testeable sin navegador)
// - Services: Comunicación API + sesión persistida
// - State: State Management con Rc<RefCell>
// - Models: Estructuras compartidas con el backend
// ============================================================================

mod app;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;

// Instancia global de la aplicación (un solo hilo en WASM)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("🏦 CoopCredit Portal iniciando...");

    let app = App::new()?;
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-renderizar la aplicación completa desde cualquier handler
pub fn rerender_app() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow().as_ref() {
            if let Err(e) = app.render() {
                log::error!("❌ Error re-renderizando la app: {:?}", e);
            }
        }
    });
}
