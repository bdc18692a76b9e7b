// ============================================================================
// MODAL / FEEDBACK - Overlays y mensajes al usuario
// ============================================================================

use gloo_timers::callback::Timeout;

use crate::dom::{add_class, get_element_by_id, remove_class, set_text_content, window};

/// Duración del mensaje de error transitorio
const ERROR_VISIBLE_MS: u32 = 3000;

/// Mostrar un modal agregando la clase `show`
pub fn open_modal(id: &str) {
    if let Some(modal) = get_element_by_id(id) {
        let _ = add_class(&modal, "show");
    }
}

/// Ocultar un modal removiendo la clase `show`
pub fn close_modal(id: &str) {
    if let Some(modal) = get_element_by_id(id) {
        let _ = remove_class(&modal, "show");
    }
}

/// Mensaje de error transitorio: se escribe el texto, se revela el
/// elemento y se vuelve a ocultar a los 3 segundos. Los timers no se
/// cancelan entre sí: si llegan errores seguidos gana el último texto.
pub fn show_transient_error(id: &str, message: &str) {
    if let Some(el) = get_element_by_id(id) {
        set_text_content(&el, message);
        let _ = remove_class(&el, "hidden");

        let id = id.to_string();
        Timeout::new(ERROR_VISIBLE_MS, move || {
            if let Some(el) = get_element_by_id(&id) {
                let _ = add_class(&el, "hidden");
            }
        })
        .forget();
    }
}

/// Alerta bloqueante para resultados de mutaciones
pub fn alert(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}
