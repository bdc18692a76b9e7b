// ============================================================================
// MODELS - Estructuras compartidas con el backend CoopCredit
// ============================================================================

pub mod affiliate;
pub mod auth;
pub mod credit;

pub use affiliate::{Affiliate, AffiliateUpdate};
pub use auth::{ApiErrorBody, LoginRequest, LoginResponse};
pub use credit::{CreditRequest, NewCreditRequest, RiskEvaluation};
