// ============================================================================
// FORM HELPERS - Lectura y escritura de campos por ID
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement};

use crate::dom::element::get_element_by_id;

/// Leer el valor de un <input> por ID (cadena vacía si no existe)
pub fn input_value(id: &str) -> String {
    get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Escribir el valor de un <input> por ID
pub fn set_input_value(id: &str, value: &str) {
    if let Some(input) = get_element_by_id(id).and_then(|el| el.dyn_into::<HtmlInputElement>().ok()) {
        input.set_value(value);
    }
}

/// Leer el valor de un <select> por ID
pub fn select_value(id: &str) -> String {
    get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
        .map(|select| select.value())
        .unwrap_or_default()
}

/// Escribir el valor de un <select> por ID
pub fn set_select_value(id: &str, value: &str) {
    if let Some(select) = get_element_by_id(id).and_then(|el| el.dyn_into::<HtmlSelectElement>().ok()) {
        select.set_value(value);
    }
}

/// Resetear un <form> por ID
pub fn reset_form(id: &str) {
    if let Some(form) = get_element_by_id(id).and_then(|el| el.dyn_into::<HtmlFormElement>().ok()) {
        form.reset();
    }
}
