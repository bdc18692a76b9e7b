// ============================================================================
// VIEWMODELS - Mapeo puro dominio → filas/mensajes + orquestación async
// ============================================================================
// Las funciones puras de esta capa se testean sin navegador; las vistas
// solo vuelcan los resultados al DOM.
// ============================================================================

pub mod affiliate_viewmodel;
pub mod credit_viewmodel;
pub mod session_viewmodel;

pub use affiliate_viewmodel::{affiliate_row, AffiliateRow};
pub use credit_viewmodel::{credit_row, CreditRow};
pub use session_viewmodel::SessionViewModel;
