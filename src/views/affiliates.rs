// ============================================================================
// AFFILIATES VIEW - Tabla, alta y edición de afiliados
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, create_element, input_value, on_click, on_submit, reset_form, select_value,
    set_class_name, set_input_value, set_select_value, ElementBuilder,
};
use crate::models::{Affiliate, AffiliateUpdate};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::viewmodels::affiliate_viewmodel::{self, affiliate_row};
use crate::views::app::load_affiliates;
use crate::views::modal::{alert, close_modal, open_modal};

const CREATE_MODAL: &str = "affiliate-modal";
const EDIT_MODAL: &str = "edit-affiliate-modal";

/// Renderizar la sección de afiliados: tabla + modales de alta/edición
pub fn render_affiliates_section(state: &AppState) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?
        .id("affiliates-screen")?
        .class("view-section")
        .build();

    // Header con botón de alta
    let header = ElementBuilder::new("div")?.class("section-header").build();
    let title = ElementBuilder::new("h2")?.text("Afiliados").build();
    let new_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text("Nuevo Afiliado")
        .build();
    on_click(&new_btn, move |_| open_modal(CREATE_MODAL))?;
    append_child(&header, &title)?;
    append_child(&header, &new_btn)?;
    append_child(&section, &header)?;

    // Tabla
    let table = ElementBuilder::new("table")?.class("data-table").build();
    let thead = create_element("thead")?;
    let head_row = create_element("tr")?;
    for heading in ["Documento", "Nombre", "Salario", "Fecha de Afiliación", "Estado", ""] {
        let th = ElementBuilder::new("th")?.text(heading).build();
        append_child(&head_row, &th)?;
    }
    append_child(&thead, &head_row)?;
    append_child(&table, &thead)?;

    let tbody = create_element("tbody")?;
    for affiliate in state.affiliates.borrow().iter() {
        let tr = render_row(state, affiliate)?;
        append_child(&tbody, &tr)?;
    }
    append_child(&table, &tbody)?;
    append_child(&section, &table)?;

    // Modales (siempre presentes, visibilidad por clase `show`)
    let create_modal = render_create_modal(state)?;
    append_child(&section, &create_modal)?;
    let edit_modal = render_edit_modal(state)?;
    append_child(&section, &edit_modal)?;

    Ok(section)
}

/// Una fila de la tabla de afiliados
fn render_row(state: &AppState, affiliate: &Affiliate) -> Result<Element, JsValue> {
    let row = affiliate_row(affiliate);
    let tr = create_element("tr")?;

    for text in [&row.document, &row.name, &row.salary_display, &row.affiliation_date] {
        let td = ElementBuilder::new("td")?.text(text).build();
        append_child(&tr, &td)?;
    }

    let status_td = create_element("td")?;
    let badge = ElementBuilder::new("span")?
        .class(&format!("badge {}", row.status_badge))
        .text(&row.status_label)
        .build();
    append_child(&status_td, &badge)?;
    append_child(&tr, &status_td)?;

    // Editar: trae el afiliado fresco, llena el formulario y abre el modal
    let actions_td = create_element("td")?;
    let edit_btn = ElementBuilder::new("button")?
        .class("btn btn-sm btn-primary")
        .text("Editar")
        .build();
    {
        let state = state.clone();
        let document = row.document.clone();
        on_click(&edit_btn, move |_| {
            let state = state.clone();
            let document = document.clone();
            spawn_local(async move {
                let api = ApiClient::new(state.session.clone());
                match api.get_affiliate(&document).await {
                    Ok(affiliate) => {
                        set_input_value("edit-af-document", &affiliate.document);
                        set_input_value("edit-af-name", &affiliate.name);
                        set_input_value("edit-af-salary", &affiliate.salary.to_string());
                        set_select_value("edit-af-status", &affiliate.status);
                        open_modal(EDIT_MODAL);
                    }
                    Err(e) => alert(&format!("Error al cargar afiliado: {}", e)),
                }
            });
        })?;
    }
    append_child(&actions_td, &edit_btn)?;
    append_child(&tr, &actions_td)?;

    Ok(tr)
}

/// Modal de alta. El estado se fuerza a ACTIVE en el payload.
fn render_create_modal(state: &AppState) -> Result<Element, JsValue> {
    let modal = ElementBuilder::new("div")?.id(CREATE_MODAL)?.class("modal").build();
    let content = ElementBuilder::new("div")?.class("modal-content").build();

    let header = render_modal_header("Nuevo Afiliado", CREATE_MODAL)?;
    append_child(&content, &header)?;

    let form = create_element("form")?;
    form.set_id("affiliate-form");
    set_class_name(&form, "modal-form");

    append_child(&form, &render_input("af-document", "Documento", "text")?)?;
    append_child(&form, &render_input("af-name", "Nombre", "text")?)?;
    append_child(&form, &render_input("af-salary", "Salario", "number")?)?;
    append_child(&form, &render_input("af-date", "Fecha de Afiliación", "date")?)?;

    let save_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primary btn-block")
        .text("Guardar")
        .build();
    append_child(&form, &save_btn)?;

    {
        let state = state.clone();
        on_submit(&form, move |e: web_sys::Event| {
            e.prevent_default();

            let payload = Affiliate::new_active(
                input_value("af-document"),
                input_value("af-name"),
                input_value("af-salary").parse().unwrap_or(0.0),
                input_value("af-date"),
            );

            let state = state.clone();
            spawn_local(async move {
                let api = ApiClient::new(state.session.clone());
                match api.create_affiliate(&payload).await {
                    Ok(()) => {
                        close_modal(CREATE_MODAL);
                        reset_form("affiliate-form");
                        load_affiliates(&state);
                    }
                    Err(e) => alert(&affiliate_viewmodel::create_error_message(&e)),
                }
            });
        })?;
    }

    append_child(&content, &form)?;
    append_child(&modal, &content)?;
    Ok(modal)
}

/// Modal de edición: documento de solo lectura, el PUT envía
/// exactamente documento, nombre, salario y estado
fn render_edit_modal(state: &AppState) -> Result<Element, JsValue> {
    let modal = ElementBuilder::new("div")?.id(EDIT_MODAL)?.class("modal").build();
    let content = ElementBuilder::new("div")?.class("modal-content").build();

    let header = render_modal_header("Editar Afiliado", EDIT_MODAL)?;
    append_child(&content, &header)?;

    let form = create_element("form")?;
    form.set_id("edit-affiliate-form");
    set_class_name(&form, "modal-form");

    // Documento de solo lectura (clave inmutable)
    let document_group = ElementBuilder::new("div")?.class("form-group").build();
    let document_label = ElementBuilder::new("label")?
        .attr("for", "edit-af-document")?
        .text("Documento")
        .build();
    let document_input = ElementBuilder::new("input")?
        .id("edit-af-document")?
        .attr("type", "text")?
        .attr("readonly", "")?
        .class("form-input")
        .build();
    append_child(&document_group, &document_label)?;
    append_child(&document_group, &document_input)?;
    append_child(&form, &document_group)?;
    append_child(&form, &render_input("edit-af-name", "Nombre", "text")?)?;
    append_child(&form, &render_input("edit-af-salary", "Salario", "number")?)?;

    // Select de estado
    let status_group = ElementBuilder::new("div")?.class("form-group").build();
    let label = ElementBuilder::new("label")?
        .attr("for", "edit-af-status")?
        .text("Estado")
        .build();
    let select = ElementBuilder::new("select")?
        .id("edit-af-status")?
        .class("form-input")
        .build();
    for status in ["ACTIVE", "INACTIVE"] {
        let option = ElementBuilder::new("option")?
            .attr("value", status)?
            .text(status)
            .build();
        append_child(&select, &option)?;
    }
    append_child(&status_group, &label)?;
    append_child(&status_group, &select)?;
    append_child(&form, &status_group)?;

    let save_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primary btn-block")
        .text("Actualizar")
        .build();
    append_child(&form, &save_btn)?;

    {
        let state = state.clone();
        on_submit(&form, move |e: web_sys::Event| {
            e.prevent_default();

            let document = input_value("edit-af-document");
            let update = AffiliateUpdate {
                document: document.clone(),
                name: input_value("edit-af-name"),
                salary: input_value("edit-af-salary").parse().unwrap_or(0.0),
                status: select_value("edit-af-status"),
            };

            let state = state.clone();
            spawn_local(async move {
                let api = ApiClient::new(state.session.clone());
                match api.update_affiliate(&document, &update).await {
                    Ok(()) => {
                        close_modal(EDIT_MODAL);
                        load_affiliates(&state);
                        alert("Afiliado actualizado correctamente");
                    }
                    Err(e) => alert(&affiliate_viewmodel::update_error_message(&e)),
                }
            });
        })?;
    }

    append_child(&content, &form)?;
    append_child(&modal, &content)?;
    Ok(modal)
}

/// Header de modal con botón de cierre
fn render_modal_header(title_text: &str, modal_id: &'static str) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("div")?.class("modal-header").build();
    let title = ElementBuilder::new("h3")?.text(title_text).build();
    let close_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-close")
        .text("✕")
        .build();
    on_click(&close_btn, move |_| close_modal(modal_id))?;
    append_child(&header, &title)?;
    append_child(&header, &close_btn)?;
    Ok(header)
}

/// Campo de formulario de modal
fn render_input(id: &str, label_text: &str, input_type: &str) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();
    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();
    let mut builder = ElementBuilder::new("input")?
        .id(id)?
        .attr("type", input_type)?
        .attr("required", "")?;
    if input_type == "number" {
        builder = builder.attr("step", "0.01")?;
    }
    let input = builder.class("form-input").build();
    append_child(&group, &label)?;
    append_child(&group, &input)?;
    Ok(group)
}
