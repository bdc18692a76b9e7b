// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Un método tipado por endpoint del backend CoopCredit. Toda petición
// autenticada lleva Content-Type JSON y Authorization: Bearer, con el
// token leído de la sesión en el momento de la llamada. Sin reintentos
// ni refresh de token.
// ============================================================================

use gloo_net::http::{Request, Response};

use crate::models::{Affiliate, AffiliateUpdate, CreditRequest, LoginRequest, LoginResponse, NewCreditRequest};
use crate::services::error::ApiError;
use crate::services::session_store::SessionStore;
use crate::utils::constants::API_BASE;

/// Cliente del backend - stateless salvo la sesión inyectada
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(session: SessionStore) -> Self {
        Self {
            base_url: API_BASE.to_string(),
            session,
        }
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.session.token().unwrap_or_default())
    }

    /// Convertir una respuesta no-2xx en ApiError::Status con el cuerpo crudo
    async fn status_error(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        ApiError::Status { status, body }
    }

    /// POST /auth/login - única llamada sin token
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/auth/login", self.base_url);
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Autenticando usuario: {}", username);

        let response = Request::post(&url)
            .json(&body)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Request error: {}", e)))?;

        if !response.ok() {
            return Err(Self::status_error(response).await);
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))
    }

    /// GET /api/afiliados
    pub async fn list_affiliates(&self) -> Result<Vec<Affiliate>, ApiError> {
        let url = format!("{}/api/afiliados", self.base_url);
        let response = Request::get(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", &self.bearer())
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Request error: {}", e)))?;

        if !response.ok() {
            return Err(Self::status_error(response).await);
        }

        response
            .json::<Vec<Affiliate>>()
            .await
            .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))
    }

    /// POST /api/afiliados
    pub async fn create_affiliate(&self, affiliate: &Affiliate) -> Result<(), ApiError> {
        let url = format!("{}/api/afiliados", self.base_url);
        let response = Request::post(&url)
            .header("Authorization", &self.bearer())
            .json(affiliate)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Request error: {}", e)))?;

        if !response.ok() {
            return Err(Self::status_error(response).await);
        }
        Ok(())
    }

    /// GET /api/afiliados/{document}
    pub async fn get_affiliate(&self, document: &str) -> Result<Affiliate, ApiError> {
        let url = format!("{}/api/afiliados/{}", self.base_url, document);
        let response = Request::get(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", &self.bearer())
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Request error: {}", e)))?;

        if !response.ok() {
            return Err(Self::status_error(response).await);
        }

        response
            .json::<Affiliate>()
            .await
            .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))
    }

    /// PUT /api/afiliados/{document}
    pub async fn update_affiliate(&self, document: &str, update: &AffiliateUpdate) -> Result<(), ApiError> {
        let url = format!("{}/api/afiliados/{}", self.base_url, document);
        let response = Request::put(&url)
            .header("Authorization", &self.bearer())
            .json(update)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Request error: {}", e)))?;

        if !response.ok() {
            return Err(Self::status_error(response).await);
        }
        Ok(())
    }

    /// GET /api/solicitudes
    pub async fn list_credits(&self) -> Result<Vec<CreditRequest>, ApiError> {
        let url = format!("{}/api/solicitudes", self.base_url);
        let response = Request::get(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", &self.bearer())
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Request error: {}", e)))?;

        if !response.ok() {
            return Err(Self::status_error(response).await);
        }

        response
            .json::<Vec<CreditRequest>>()
            .await
            .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))
    }

    /// POST /api/solicitudes
    pub async fn create_credit(&self, request: &NewCreditRequest) -> Result<(), ApiError> {
        let url = format!("{}/api/solicitudes", self.base_url);

        log::info!(
            "💳 Creando solicitud: afiliado {} por ${}",
            request.affiliate_document,
            request.amount
        );

        let response = Request::post(&url)
            .header("Authorization", &self.bearer())
            .json(request)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Request error: {}", e)))?;

        if !response.ok() {
            return Err(Self::status_error(response).await);
        }
        Ok(())
    }
}
