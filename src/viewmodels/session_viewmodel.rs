// ============================================================================
// SESSION VIEWMODEL - Login y logout
// ============================================================================

use crate::services::error::ApiError;
use crate::services::{ApiClient, SessionStore};

/// Mensaje inline del formulario de login. Cualquier respuesta no-2xx
/// se trata como credenciales inválidas; el fallo de transporte tiene
/// su propio mensaje.
pub fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Network(_) => "Error de conexión".to_string(),
        ApiError::Status { .. } => "Credenciales incorrectas".to_string(),
    }
}

/// ViewModel de sesión - autenticación contra el backend
pub struct SessionViewModel {
    api: ApiClient,
    session: SessionStore,
}

impl SessionViewModel {
    pub fn new(session: SessionStore) -> Self {
        Self {
            api: ApiClient::new(session.clone()),
            session,
        }
    }

    /// Autenticar y arrancar la sesión. Devuelve el mensaje de UI en Err.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), String> {
        match self.api.login(username, password).await {
            Ok(response) => {
                log::info!("✅ Login exitoso, sesión iniciada");
                self.session.start(response.token, response.role);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Error en login: {}", e);
                Err(login_error_message(&e))
            }
        }
    }

    /// Cerrar sesión: solo limpia estado local, sin llamada al servidor
    pub fn logout(&self) {
        log::info!("👋 Logout - limpiando sesión");
        self.session.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_2xx_es_credenciales_incorrectas() {
        let err = ApiError::Status { status: 401, body: String::new() };
        assert_eq!(login_error_message(&err), "Credenciales incorrectas");

        let err = ApiError::Status { status: 500, body: "boom".into() };
        assert_eq!(login_error_message(&err), "Credenciales incorrectas");
    }

    #[test]
    fn fallo_de_transporte_es_error_de_conexion() {
        let err = ApiError::Network("fetch failed".into());
        assert_eq!(login_error_message(&err), "Error de conexión");
    }
}
