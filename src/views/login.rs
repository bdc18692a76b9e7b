// ============================================================================
// LOGIN VIEW - Pantalla de autenticación
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, create_element, input_value, on_submit, set_class_name, ElementBuilder};
use crate::state::{AppState, Section};
use crate::viewmodels::SessionViewModel;
use crate::views::modal::show_transient_error;
use crate::views::show_section;

/// Renderizar pantalla de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let screen = ElementBuilder::new("div")?.class("login-screen").build();
    let container = ElementBuilder::new("div")?.class("login-container").build();

    // Header
    let header = ElementBuilder::new("div")?.class("login-header").build();
    let title = ElementBuilder::new("h1")?.text("CoopCredit").build();
    let subtitle = ElementBuilder::new("p")?
        .text("Gestión de afiliados y créditos")
        .build();
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;

    // Mensaje de error transitorio (oculto por defecto)
    let error_box = ElementBuilder::new("div")?
        .id("login-error")?
        .class("login-error hidden")
        .build();

    // Formulario
    let form = create_element("form")?;
    set_class_name(&form, "login-form");

    let username_group = create_field("username", "Usuario", "text")?;
    let password_group = create_field("password", "Contraseña", "password")?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primary btn-block")
        .text("Ingresar")
        .build();

    append_child(&form, &username_group)?;
    append_child(&form, &password_group)?;
    append_child(&form, &submit_btn)?;

    // Submit: autenticar y pasar al shell de la app
    {
        let state = state.clone();
        on_submit(&form, move |e: web_sys::Event| {
            e.prevent_default();

            let username = input_value("username");
            let password = input_value("password");
            let state = state.clone();

            spawn_local(async move {
                let vm = SessionViewModel::new(state.session.clone());
                match vm.login(&username, &password).await {
                    Ok(()) => show_section(&state, Section::Dashboard),
                    Err(msg) => show_transient_error("login-error", &msg),
                }
            });
        })?;
    }

    append_child(&container, &header)?;
    append_child(&container, &error_box)?;
    append_child(&container, &form)?;
    append_child(&screen, &container)?;

    Ok(screen)
}

/// Helper para crear un campo del formulario
fn create_field(id: &str, label_text: &str, input_type: &str) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let input = ElementBuilder::new("input")?
        .id(id)?
        .attr("type", input_type)?
        .attr("name", id)?
        .attr("required", "")?
        .class("form-input")
        .build();

    append_child(&group, &label)?;
    append_child(&group, &input)?;
    Ok(group)
}
