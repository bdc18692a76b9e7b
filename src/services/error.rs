use std::fmt;

/// Error de una llamada al backend. Distingue fallo de transporte
/// (red/CORS) de respuesta no-2xx, porque el cliente muestra mensajes
/// distintos para cada caso.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// La petición nunca llegó o no hubo respuesta
    Network(String),
    /// El servidor respondió con un estado no-2xx; `body` es el
    /// cuerpo crudo (puede o no ser JSON)
    Status { status: u16, body: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "Network error: {}", e),
            ApiError::Status { status, body } => write!(f, "HTTP {}: {}", status, body),
        }
    }
}
