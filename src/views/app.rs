// ============================================================================
// APP VIEW - Shell de la aplicación y router de secciones
// ============================================================================
// Muestra login o shell según haya token en la sesión. Cambiar de
// sección re-renderiza y, para Afiliados/Solicitudes, dispara la
// recarga completa de la lista (sin cache del lado del cliente).
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::services::ApiClient;
use crate::state::{AppState, Section};
use crate::viewmodels::SessionViewModel;
use crate::views::{affiliates, credits, render_login};

/// Renderizar la aplicación completa según el estado actual
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let root = ElementBuilder::new("div")?.build();

    if !state.session.is_authenticated() {
        let login = render_login(state)?;
        append_child(&root, &login)?;
        return Ok(root);
    }

    let navbar = render_navbar(state)?;
    append_child(&root, &navbar)?;

    let section = match state.active_section() {
        Section::Dashboard => render_dashboard(state)?,
        Section::Affiliates => affiliates::render_affiliates_section(state)?,
        Section::Credits => credits::render_credits_section(state)?,
    };
    append_child(&root, &section)?;

    Ok(root)
}

/// Activar una sección: actualizar estado, re-renderizar y recargar
/// los datos asociados (Afiliados y Solicitudes; el dashboard no tiene)
pub fn show_section(state: &AppState, section: Section) {
    state.set_active_section(section);
    crate::rerender_app();

    match section {
        Section::Affiliates => load_affiliates(state),
        Section::Credits => load_credits(state),
        Section::Dashboard => {}
    }
}

/// Recargar la lista de afiliados. En caso de error se deja el
/// contenido anterior de la tabla y solo se loguea.
pub fn load_affiliates(state: &AppState) {
    let state = state.clone();
    spawn_local(async move {
        let api = ApiClient::new(state.session.clone());
        match api.list_affiliates().await {
            Ok(affiliates) => {
                log::info!("📋 {} afiliados cargados", affiliates.len());
                state.set_affiliates(affiliates);
                crate::rerender_app();
            }
            Err(e) => log::error!("❌ Error cargando afiliados: {}", e),
        }
    });
}

/// Recargar la lista de solicitudes de crédito
pub fn load_credits(state: &AppState) {
    let state = state.clone();
    spawn_local(async move {
        let api = ApiClient::new(state.session.clone());
        match api.list_credits().await {
            Ok(credits) => {
                log::info!("📋 {} solicitudes cargadas", credits.len());
                state.set_credits(credits);
                crate::rerender_app();
            }
            Err(e) => log::error!("❌ Error cargando solicitudes: {}", e),
        }
    });
}

/// Barra de navegación con el link activo marcado
fn render_navbar(state: &AppState) -> Result<Element, JsValue> {
    let navbar = ElementBuilder::new("nav")?.class("navbar").build();

    let brand = ElementBuilder::new("span")?
        .class("brand")
        .text("CoopCredit")
        .build();
    append_child(&navbar, &brand)?;

    let active = state.active_section();
    for section in Section::all() {
        let class = if section == active {
            "nav-link active"
        } else {
            "nav-link"
        };
        let link = ElementBuilder::new("a")?
            .attr("href", "#")?
            .attr("data-target", section.id())?
            .class(class)
            .text(section.label())
            .build();

        {
            let state = state.clone();
            on_click(&link, move |e: web_sys::MouseEvent| {
                e.prevent_default();
                show_section(&state, section);
            })?;
        }

        append_child(&navbar, &link)?;
    }

    let spacer = ElementBuilder::new("div")?.class("spacer").build();
    append_child(&navbar, &spacer)?;

    // Logout: limpia la sesión localmente, sin llamada al servidor
    let logout_btn = ElementBuilder::new("button")?
        .class("btn btn-secondary btn-sm")
        .text("Cerrar sesión")
        .build();
    {
        let state = state.clone();
        on_click(&logout_btn, move |_| {
            let vm = SessionViewModel::new(state.session.clone());
            vm.logout();
            state.set_active_section(Section::Dashboard);
            crate::rerender_app();
        })?;
    }
    append_child(&navbar, &logout_btn)?;

    Ok(navbar)
}

/// Sección de inicio, sin datos asociados
fn render_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?
        .id("dashboard-screen")?
        .class("view-section")
        .build();

    let title = ElementBuilder::new("h2")?.text("Panel de gestión").build();
    append_child(&section, &title)?;

    let text = match state.session.role() {
        Some(role) => format!("Sesión activa ({}). Use el menú para gestionar afiliados y solicitudes de crédito.", role),
        None => "Sesión activa. Use el menú para gestionar afiliados y solicitudes de crédito.".to_string(),
    };
    let subtitle = ElementBuilder::new("p")?.text(&text).build();
    append_child(&section, &subtitle)?;

    Ok(section)
}
