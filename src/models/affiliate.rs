use serde::{Deserialize, Serialize};

/// Estado de afiliado activo (el backend conoce ACTIVE | INACTIVE,
/// pero el cliente trata cualquier otro valor como no-activo)
pub const STATUS_ACTIVE: &str = "ACTIVE";

/// Afiliado de la cooperativa. `document` es la clave única e inmutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Affiliate {
    pub document: String,
    pub name: String,
    pub salary: f64,
    pub affiliation_date: String,
    pub status: String,
}

impl Affiliate {
    /// Payload de creación: el estado siempre se fuerza a ACTIVE
    /// en el cliente, sin importar lo que traiga el formulario
    pub fn new_active(document: String, name: String, salary: f64, affiliation_date: String) -> Self {
        Self {
            document,
            name,
            salary,
            affiliation_date,
            status: STATUS_ACTIVE.to_string(),
        }
    }
}

/// Payload de PUT /api/afiliados/{document}: exactamente estos
/// cuatro campos, el resto lo conserva el servidor
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateUpdate {
    pub document: String,
    pub name: String,
    pub salary: f64,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn crear_afiliado_fuerza_estado_active() {
        let af = Affiliate::new_active(
            "123456".into(),
            "Ana Pérez".into(),
            2500000.0,
            "2024-01-15".into(),
        );
        assert_eq!(af.status, "ACTIVE");

        let json = serde_json::to_value(&af).unwrap();
        assert_eq!(json["status"], "ACTIVE");
        assert_eq!(json["affiliationDate"], "2024-01-15");
    }

    #[test]
    fn update_envia_exactamente_cuatro_campos() {
        let update = AffiliateUpdate {
            document: "123456".into(),
            name: "Ana Pérez".into(),
            salary: 2800000.0,
            status: "INACTIVE".into(),
        };
        let json = serde_json::to_value(&update).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert!(obj.contains_key("document"));
        assert!(obj.contains_key("name"));
        assert!(obj.contains_key("salary"));
        assert!(obj.contains_key("status"));
    }
}
