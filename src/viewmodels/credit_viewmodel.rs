// ============================================================================
// CREDIT VIEWMODEL - Filas de solicitudes y taxonomía de errores de creación
// ============================================================================

use serde_json::from_str;

use crate::models::{ApiErrorBody, CreditRequest, RiskEvaluation};
use crate::services::error::ApiError;
use crate::utils::format::{format_date, format_money};

/// Badge secundario de evaluación de riesgo
#[derive(Debug, Clone, PartialEq)]
pub struct RiskBadge {
    pub label: String,
    pub class: &'static str,
}

/// Fila renderizable de la tabla de solicitudes
#[derive(Debug, Clone, PartialEq)]
pub struct CreditRow {
    pub id_display: String,
    pub amount_display: String,
    pub term_display: String,
    pub status_label: String,
    pub status_badge: &'static str,
    /// None se renderiza como "-"
    pub risk: Option<RiskBadge>,
    pub date_display: String,
}

/// Clase del badge según el estado asignado por el servidor
pub fn credit_status_badge(status: &str) -> &'static str {
    match status {
        "APPROVED" => "badge-success",
        "REJECTED" => "badge-danger",
        "PENDING" => "badge-warning",
        _ => "badge-neutral",
    }
}

/// Badge de riesgo: solo BAJO es favorable
pub fn risk_badge(evaluation: &RiskEvaluation) -> RiskBadge {
    let class = if evaluation.risk_level == "BAJO" {
        "badge-success"
    } else {
        "badge-danger"
    };
    RiskBadge {
        label: format!("{} ({})", evaluation.risk_level, evaluation.score),
        class,
    }
}

/// Mapear una solicitud a su fila de tabla
pub fn credit_row(credit: &CreditRequest) -> CreditRow {
    CreditRow {
        id_display: credit.id.to_string(),
        amount_display: format_money(credit.requested_amount),
        term_display: format!("{} meses", credit.term_months),
        status_label: credit.status.clone(),
        status_badge: credit_status_badge(&credit.status),
        risk: credit.risk_evaluation.as_ref().map(risk_badge),
        date_display: credit
            .application_date
            .as_deref()
            .map(format_date)
            .unwrap_or_else(|| "-".to_string()),
    }
}

/// Mensaje de alerta al fallar la creación de una solicitud.
/// Prioridad: detail/message del cuerpo JSON → 403 de permisos →
/// error genérico del servidor con el código de estado.
pub fn create_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Network(_) => "Error conectando al servidor (Red/CORS)".to_string(),
        ApiError::Status { status, body } => match from_str::<ApiErrorBody>(body) {
            Ok(parsed) => parsed
                .detail
                .or(parsed.message)
                .unwrap_or_else(|| "Solicitud rechazada".to_string()),
            Err(_) => {
                if *status == 403 {
                    "Acceso denegado: No tienes permisos (Rol incorrecto)".to_string()
                } else {
                    format!("Error del servidor ({})", status)
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn solicitud(status: &str, risk: Option<RiskEvaluation>) -> CreditRequest {
        CreditRequest {
            id: 42,
            affiliate: None,
            requested_amount: 5000000.0,
            term_months: 24,
            proposed_rate: None,
            status: status.into(),
            risk_evaluation: risk,
            application_date: Some("2024-03-15T10:30:00".into()),
        }
    }

    #[test]
    fn badges_de_estado() {
        assert_eq!(credit_status_badge("APPROVED"), "badge-success");
        assert_eq!(credit_status_badge("REJECTED"), "badge-danger");
        assert_eq!(credit_status_badge("PENDING"), "badge-warning");
        assert_eq!(credit_status_badge("EN_REVISION"), "badge-neutral");
    }

    #[test]
    fn riesgo_bajo_es_favorable() {
        let badge = risk_badge(&RiskEvaluation {
            score: 720,
            risk_level: "BAJO".into(),
            decision_reason: None,
        });
        assert_eq!(badge.class, "badge-success");
        assert_eq!(badge.label, "BAJO (720)");
    }

    #[test]
    fn cualquier_otro_riesgo_es_peligro() {
        for level in ["MEDIO", "ALTO", "DESCONOCIDO"] {
            let badge = risk_badge(&RiskEvaluation {
                score: 400,
                risk_level: level.into(),
                decision_reason: None,
            });
            assert_eq!(badge.class, "badge-danger", "nivel {}", level);
        }
    }

    #[test]
    fn fila_completa() {
        let row = credit_row(&solicitud("PENDING", None));
        assert_eq!(row.id_display, "42");
        assert_eq!(row.amount_display, "$5.000.000");
        assert_eq!(row.term_display, "24 meses");
        assert_eq!(row.status_badge, "badge-warning");
        assert_eq!(row.risk, None);
        assert_eq!(row.date_display, "15/03/2024");
    }

    #[test]
    fn fila_sin_fecha_muestra_guion() {
        let mut credit = solicitud("PENDING", None);
        credit.application_date = None;
        assert_eq!(credit_row(&credit).date_display, "-");
    }

    #[test]
    fn error_403_sin_json_es_mensaje_de_permisos() {
        let err = ApiError::Status {
            status: 403,
            body: "Forbidden".into(),
        };
        assert_eq!(
            create_error_message(&err),
            "Acceso denegado: No tienes permisos (Rol incorrecto)"
        );
    }

    #[test]
    fn error_no_403_sin_json_es_error_del_servidor() {
        let err = ApiError::Status {
            status: 500,
            body: "<html>Internal Server Error</html>".into(),
        };
        assert_eq!(create_error_message(&err), "Error del servidor (500)");
    }

    #[test]
    fn detail_del_backend_se_muestra_verbatim() {
        let err = ApiError::Status {
            status: 422,
            body: r#"{"detail":"El monto excede la capacidad de endeudamiento"}"#.into(),
        };
        assert_eq!(
            create_error_message(&err),
            "El monto excede la capacidad de endeudamiento"
        );
    }

    #[test]
    fn message_es_el_fallback_de_detail() {
        let err = ApiError::Status {
            status: 400,
            body: r#"{"message":"Plazo inválido"}"#.into(),
        };
        assert_eq!(create_error_message(&err), "Plazo inválido");
    }

    #[test]
    fn json_sin_detail_ni_message_es_solicitud_rechazada() {
        let err = ApiError::Status {
            status: 400,
            body: r#"{"timestamp":"2024-03-15"}"#.into(),
        };
        assert_eq!(create_error_message(&err), "Solicitud rechazada");
    }

    #[test]
    fn fallo_de_red_es_mensaje_de_conexion() {
        let err = ApiError::Network("fetch failed".into());
        assert_eq!(
            create_error_message(&err),
            "Error conectando al servidor (Red/CORS)"
        );
    }
}
