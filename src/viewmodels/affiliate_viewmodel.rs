// ============================================================================
// AFFILIATE VIEWMODEL - Filas de la tabla de afiliados y mensajes de error
// ============================================================================

use serde_json::from_str;

use crate::models::{Affiliate, ApiErrorBody};
use crate::services::error::ApiError;
use crate::utils::format::format_money;

/// Fila renderizable de la tabla de afiliados
#[derive(Debug, Clone, PartialEq)]
pub struct AffiliateRow {
    pub document: String,
    pub name: String,
    pub salary_display: String,
    pub affiliation_date: String,
    pub status_label: String,
    pub status_badge: &'static str,
}

/// Clase del badge de estado: solo ACTIVE es éxito, cualquier otro
/// valor (INACTIVE o desconocido) se pinta como peligro
pub fn status_badge_class(status: &str) -> &'static str {
    if status == "ACTIVE" {
        "badge-success"
    } else {
        "badge-danger"
    }
}

/// Mapear un afiliado a su fila de tabla
pub fn affiliate_row(affiliate: &Affiliate) -> AffiliateRow {
    AffiliateRow {
        document: affiliate.document.clone(),
        name: affiliate.name.clone(),
        salary_display: format_money(affiliate.salary),
        affiliation_date: affiliate.affiliation_date.clone(),
        status_label: affiliate.status.clone(),
        status_badge: status_badge_class(&affiliate.status),
    }
}

/// Mensaje de alerta al fallar la creación de un afiliado
pub fn create_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Network(_) => "Error de red".to_string(),
        ApiError::Status { .. } => {
            "Error al guardar afiliado (verifique permisos o duplicados)".to_string()
        }
    }
}

/// Mensaje de alerta al fallar la actualización: se prefiere el
/// `detail` que manda el backend, con fallback genérico
pub fn update_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Network(_) => "Error de conexión".to_string(),
        ApiError::Status { body, .. } => {
            let detail = from_str::<ApiErrorBody>(body)
                .ok()
                .and_then(|b| b.detail)
                .unwrap_or_else(|| "No se pudo actualizar".to_string());
            format!("Error: {}", detail)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn afiliado(status: &str) -> Affiliate {
        Affiliate {
            document: "123456".into(),
            name: "Ana Pérez".into(),
            salary: 2500000.0,
            affiliation_date: "2024-01-15".into(),
            status: status.into(),
        }
    }

    #[test]
    fn active_es_badge_success() {
        assert_eq!(status_badge_class("ACTIVE"), "badge-success");
    }

    #[test]
    fn cualquier_otro_estado_es_badge_danger() {
        assert_eq!(status_badge_class("INACTIVE"), "badge-danger");
        assert_eq!(status_badge_class("SUSPENDED"), "badge-danger");
        assert_eq!(status_badge_class(""), "badge-danger");
    }

    #[test]
    fn fila_con_salario_agrupado() {
        let row = affiliate_row(&afiliado("ACTIVE"));
        assert_eq!(row.salary_display, "$2.500.000");
        assert_eq!(row.affiliation_date, "2024-01-15");
        assert_eq!(row.status_badge, "badge-success");
    }

    #[test]
    fn error_de_creacion_por_red() {
        let msg = create_error_message(&ApiError::Network("timeout".into()));
        assert_eq!(msg, "Error de red");
    }

    #[test]
    fn error_de_creacion_por_estado() {
        let err = ApiError::Status { status: 409, body: "{}".into() };
        assert_eq!(
            create_error_message(&err),
            "Error al guardar afiliado (verifique permisos o duplicados)"
        );
    }

    #[test]
    fn error_de_actualizacion_usa_detail_del_backend() {
        let err = ApiError::Status {
            status: 400,
            body: r#"{"detail":"El salario no puede ser negativo"}"#.into(),
        };
        assert_eq!(
            update_error_message(&err),
            "Error: El salario no puede ser negativo"
        );
    }

    #[test]
    fn error_de_actualizacion_sin_detail_cae_al_generico() {
        let err = ApiError::Status { status: 500, body: "oops".into() };
        assert_eq!(update_error_message(&err), "Error: No se pudo actualizar");
    }
}
