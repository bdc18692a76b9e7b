// ============================================================================
// SERVICES - Comunicación HTTP y persistencia de sesión
// ============================================================================

pub mod api_client;
pub mod error;
pub mod session_store;

pub use api_client::ApiClient;
pub use error::ApiError;
pub use session_store::{LocalStorageBackend, MemoryStorageBackend, SessionStorage, SessionStore};
