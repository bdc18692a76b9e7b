/// URL base del backend CoopCredit
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:8082 (por defecto)
/// - Producción: via API_BASE env var (ver build.rs)
pub const API_BASE: &str = match option_env!("API_BASE") {
    Some(url) => url,
    None => "http://localhost:8082",
};

/// Claves de localStorage para la sesión
pub const TOKEN_KEY: &str = "jwt_token";
pub const ROLE_KEY: &str = "user_role";
