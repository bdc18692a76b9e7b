// ============================================================================
// CREDITS VIEW - Tabla y alta de solicitudes de crédito
// ============================================================================
// Las solicitudes no se editan ni se borran desde el cliente: estado y
// evaluación de riesgo los asigna el servidor.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, create_element, input_value, on_click, on_submit, reset_form, set_class_name,
    ElementBuilder,
};
use crate::models::{CreditRequest, NewCreditRequest};
use crate::services::{ApiClient, ApiError};
use crate::state::{AppState, Section};
use crate::viewmodels::credit_viewmodel::{self, credit_row};
use crate::views::modal::{alert, close_modal, open_modal};
use crate::views::show_section;

const CREATE_MODAL: &str = "credit-modal";

/// Renderizar la sección de solicitudes: tabla + modal de alta
pub fn render_credits_section(state: &AppState) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?
        .id("credits-screen")?
        .class("view-section")
        .build();

    let header = ElementBuilder::new("div")?.class("section-header").build();
    let title = ElementBuilder::new("h2")?.text("Solicitudes de Crédito").build();
    let new_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text("Nueva Solicitud")
        .build();
    on_click(&new_btn, move |_| open_modal(CREATE_MODAL))?;
    append_child(&header, &title)?;
    append_child(&header, &new_btn)?;
    append_child(&section, &header)?;

    let table = ElementBuilder::new("table")?.class("data-table").build();
    let thead = create_element("thead")?;
    let head_row = create_element("tr")?;
    for heading in ["ID", "Monto", "Plazo", "Estado", "Riesgo", "Fecha"] {
        let th = ElementBuilder::new("th")?.text(heading).build();
        append_child(&head_row, &th)?;
    }
    append_child(&thead, &head_row)?;
    append_child(&table, &thead)?;

    let tbody = create_element("tbody")?;
    for credit in state.credits.borrow().iter() {
        let tr = render_row(credit)?;
        append_child(&tbody, &tr)?;
    }
    append_child(&table, &tbody)?;
    append_child(&section, &table)?;

    let create_modal = render_create_modal(state)?;
    append_child(&section, &create_modal)?;

    Ok(section)
}

/// Una fila de la tabla de solicitudes
fn render_row(credit: &CreditRequest) -> Result<Element, JsValue> {
    let row = credit_row(credit);
    let tr = create_element("tr")?;

    for text in [&row.id_display, &row.amount_display, &row.term_display] {
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

    // Riesgo: badge secundario o guion cuando aún no hay evaluación
    let risk_td = create_element("td")?;
    match &row.risk {
        Some(risk) => {
            let risk_badge = ElementBuilder::new("span")?
                .class(&format!("badge {}", risk.class))
                .text(&risk.label)
                .build();
            append_child(&risk_td, &risk_badge)?;
        }
        None => {
            let dash = ElementBuilder::new("span")?.text("-").build();
            append_child(&risk_td, &dash)?;
        }
    }
    append_child(&tr, &risk_td)?;

    let date_td = ElementBuilder::new("td")?.text(&row.date_display).build();
    append_child(&tr, &date_td)?;

    Ok(tr)
}

/// Modal de alta de solicitud
fn render_create_modal(state: &AppState) -> Result<Element, JsValue> {
    let modal = ElementBuilder::new("div")?.id(CREATE_MODAL)?.class("modal").build();
    let content = ElementBuilder::new("div")?.class("modal-content").build();

    // Header con botón de cierre
    let header = ElementBuilder::new("div")?.class("modal-header").build();
    let title = ElementBuilder::new("h3")?.text("Nueva Solicitud").build();
    let close_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-close")
        .text("✕")
        .build();
    on_click(&close_btn, move |_| close_modal(CREATE_MODAL))?;
    append_child(&header, &title)?;
    append_child(&header, &close_btn)?;
    append_child(&content, &header)?;

    let form = create_element("form")?;
    form.set_id("credit-form");
    set_class_name(&form, "modal-form");

    append_child(&form, &render_input("cr-document", "Documento del Afiliado", "text")?)?;
    append_child(&form, &render_input("cr-amount", "Monto", "number")?)?;
    append_child(&form, &render_input("cr-term", "Plazo (meses)", "number")?)?;

    let save_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primary btn-block")
        .text("Enviar Solicitud")
        .build();
    append_child(&form, &save_btn)?;

    {
        let state = state.clone();
        on_submit(&form, move |e: web_sys::Event| {
            e.prevent_default();

            let payload = NewCreditRequest {
                affiliate_document: input_value("cr-document"),
                amount: input_value("cr-amount").parse().unwrap_or(0.0),
                term: input_value("cr-term").parse().unwrap_or(0),
            };

            let state = state.clone();
            spawn_local(async move {
                let api = ApiClient::new(state.session.clone());
                match api.create_credit(&payload).await {
                    Ok(()) => {
                        close_modal(CREATE_MODAL);
                        reset_form("credit-form");
                        alert("Solicitud creada exitosamente");
                        // Volver a la lista recargada
                        show_section(&state, Section::Credits);
                    }
                    Err(e) => {
                        let msg = credit_viewmodel::create_error_message(&e);
                        match e {
                            ApiError::Network(_) => alert(&msg),
                            ApiError::Status { .. } => alert(&format!("Error: {}", msg)),
                        }
                    }
                }
            });
        })?;
    }

    append_child(&content, &form)?;
    append_child(&modal, &content)?;
    Ok(modal)
}

/// Campo del formulario de solicitud
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
    if id == "cr-amount" {
        builder = builder.attr("step", "0.01")?;
    }
    let input = builder.class("form-input").build();
    append_child(&group, &label)?;
    append_child(&group, &input)?;
    Ok(group)
}
