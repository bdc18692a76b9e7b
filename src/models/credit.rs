use serde::{Deserialize, Serialize};

use super::affiliate::Affiliate;

/// Solicitud de crédito. Estado y evaluación de riesgo los asigna el
/// servidor; este cliente solo los lee.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditRequest {
    pub id: i64,
    #[serde(default)]
    pub affiliate: Option<Affiliate>,
    pub requested_amount: f64,
    pub term_months: u32,
    #[serde(default)]
    pub proposed_rate: Option<f64>,
    pub status: String,
    #[serde(default)]
    pub risk_evaluation: Option<RiskEvaluation>,
    #[serde(default)]
    pub application_date: Option<String>,
}

/// Resultado de la central de riesgo (solo BAJO se considera favorable)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskEvaluation {
    pub score: i32,
    pub risk_level: String,
    #[serde(default)]
    pub decision_reason: Option<String>,
}

/// Payload de POST /api/solicitudes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCreditRequest {
    pub affiliate_document: String,
    pub amount: f64,
    pub term: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializa_respuesta_del_backend() {
        let json = r#"{
            "id": 7,
            "requestedAmount": 5000000.0,
            "termMonths": 24,
            "status": "APPROVED",
            "riskEvaluation": { "score": 720, "riskLevel": "BAJO" },
            "applicationDate": "2024-03-15T10:30:00"
        }"#;
        let cr: CreditRequest = serde_json::from_str(json).unwrap();
        assert_eq!(cr.id, 7);
        assert_eq!(cr.term_months, 24);
        assert_eq!(cr.risk_evaluation.as_ref().unwrap().risk_level, "BAJO");
        assert!(cr.affiliate.is_none());
    }

    #[test]
    fn deserializa_sin_evaluacion_de_riesgo() {
        let json = r#"{
            "id": 8,
            "requestedAmount": 1000000.0,
            "termMonths": 12,
            "status": "PENDING"
        }"#;
        let cr: CreditRequest = serde_json::from_str(json).unwrap();
        assert!(cr.risk_evaluation.is_none());
        assert!(cr.application_date.is_none());
    }

    #[test]
    fn payload_de_creacion_usa_nombres_del_backend() {
        let payload = NewCreditRequest {
            affiliate_document: "123456".into(),
            amount: 3000000.0,
            term: 36,
        };
        let json = serde_json::to_value(&payload).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert_eq!(json["affiliateDocument"], "123456");
        assert_eq!(json["term"], 36);
    }
}
