use serde::{Deserialize, Serialize};

/// Credenciales enviadas a POST /auth/login
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Respuesta del login: el backend siempre devuelve el token;
/// el rol solo viene en despliegues que lo exponen
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Cuerpo de error estructurado del backend (GlobalExceptionHandler de Spring)
/// Puede traer `detail` (problem detail) o `message` según el tipo de fallo
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
